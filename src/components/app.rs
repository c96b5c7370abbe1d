use crate::components::views::{ContactForm, RadarChart, Timeline, TimelineStats};
use crate::components::{
    LoadingScreen, MusicPlayerWidget, Navbar, ParticleBackground, RevealSection, VisitorCounter,
};
use crate::config::{PlayerSettings, SiteSettings};
use crate::db::load_theme;
use dioxus::prelude::*;

/// Whole single-page portfolio: splash, particles, navbar, sections, footer and the floating player
#[component]
pub fn PortfolioShell() -> Element {
    let site = use_context_provider(SiteSettings::default);
    use_context_provider(PlayerSettings::default);
    let theme = use_signal(load_theme);
    use_context_provider(|| theme);

    let root_class = format!("portfolio-root {}", theme().root_class());

    rsx! {
        div { class: "{root_class.trim_end()}",
            LoadingScreen {}
            ParticleBackground {}
            Navbar {}

            main {
                RevealSection { id: "home", class: "hero fade-in-up",
                    h1 { class: "hero-title", "{site.owner}" }
                    p { class: "hero-tagline", "{site.tagline}" }
                    a { class: "cta-button", href: "#contact", "Liên hệ" }
                }

                RevealSection { id: "skills", class: "skills-section",
                    h2 { class: "section-title", "Kỹ năng" }
                    div { class: "radar-container", RadarChart {} }
                }

                RevealSection { id: "certificates", class: "certificates-section",
                    h2 { class: "section-title", "Thành tích" }
                    Timeline {}
                    TimelineStats {}
                }

                RevealSection { id: "contact", class: "contact-section",
                    h2 { class: "section-title", "Liên hệ" }
                    ContactForm {}
                }
            }

            footer { class: "site-footer",
                p { "© {site.owner}" }
                VisitorCounter {}
            }

            MusicPlayerWidget {}
        }
    }
}

use crate::components::Icon;
use crate::config::SiteSettings;
use crate::db::{save_theme, Theme};
use dioxus::prelude::*;
use tracing::warn;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

const SCROLLED_OFFSET: f64 = 50.0;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Trang chủ"),
    ("#skills", "Kỹ năng"),
    ("#certificates", "Thành tích"),
    ("#contact", "Liên hệ"),
];

/// The navbar switches to its compact style once the page has scrolled this far.
pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

#[component]
pub fn Navbar() -> Element {
    let site = use_context::<SiteSettings>();
    let mut menu_open = use_signal(|| false);
    let mut active_link = use_signal(|| NAV_LINKS[0].0);
    #[allow(unused_mut)]
    let mut scrolled = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };
        let runtime = Runtime::current();
        let on_scroll = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            let y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let next = navbar_is_scrolled(y);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }) as Box<dyn FnMut()>);
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    });

    let nav_class = if scrolled() { "navbar scrolled" } else { "navbar" };
    let links_class = if menu_open() { "nav-links active" } else { "nav-links" };

    rsx! {
        nav { id: "navbar", class: "{nav_class}",
            a { class: "nav-brand", href: "#home", "{site.owner}" }
            button {
                id: "mobileMenuToggle",
                class: "mobile-menu-toggle",
                title: "Menu",
                onclick: move |_| menu_open.toggle(),
                Icon { name: "menu".to_string(), class: "w-5 h-5".to_string() }
            }
            ul { id: "navLinks", class: "{links_class}",
                for (href, label) in NAV_LINKS {
                    li { key: "{href}",
                        a {
                            class: if active_link() == href { "nav-link active" } else { "nav-link" },
                            href: "{href}",
                            onclick: move |_| {
                                active_link.set(href);
                                menu_open.set(false);
                            },
                            "{label}"
                        }
                    }
                }
            }
            ThemeToggle {}
        }
    }
}

/// Sun/moon button that flips and persists the colour scheme
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let current = theme();

    let on_toggle = move |_| {
        let next = theme.peek().toggled();
        theme.set(next);
        if let Err(err) = save_theme(next) {
            warn!(error = %err, theme = next.as_str(), "failed to persist theme");
        }
    };

    rsx! {
        button {
            id: "darkModeToggle",
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: on_toggle,
            Icon { name: current.icon().to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_compacts_past_offset() {
        assert!(!navbar_is_scrolled(0.0));
        assert!(!navbar_is_scrolled(50.0));
        assert!(navbar_is_scrolled(50.5));
    }
}

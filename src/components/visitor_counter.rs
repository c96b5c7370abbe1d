use crate::api::{fetch_visitor_count, VisitorCount};
use crate::components::Icon;
use crate::config::SiteSettings;
use dioxus::prelude::*;
use tracing::warn;

/// Footer page-view counter, fetched once per page load
#[component]
pub fn VisitorCounter() -> Element {
    let site = use_context::<SiteSettings>();

    let count = use_resource(move || {
        let site = site.clone();
        async move {
            let result = fetch_visitor_count(&site).await;
            if let Err(err) = &result {
                warn!(error = %err, "error fetching visitor count");
            }
            VisitorCount::from_fetch(&result)
        }
    });

    let count = count().unwrap_or_default();
    if !count.is_shown() {
        return rsx! {
            div { class: "visitor-counter" }
        };
    }
    let label = count.label();

    rsx! {
        div { class: "visitor-counter",
            Icon { name: "eye".to_string(), class: "w-4 h-4".to_string() }
            span {
                span { class: "visitor-counter-number", "{label}" }
                " views"
            }
        }
    }
}

use crate::utils::sleep;
use dioxus::prelude::*;
use std::time::Duration;

/// How long the splash stays up once the page has mounted
const HIDE_DELAY: Duration = Duration::from_millis(1000);

/// Full-screen splash shown until the page has settled
#[component]
pub fn LoadingScreen() -> Element {
    let mut hidden = use_signal(|| false);

    use_future(move || async move {
        reset_scroll();
        sleep(HIDE_DELAY).await;
        hidden.set(true);
    });

    rsx! {
        div {
            id: "loading",
            class: if hidden() { "loading-screen hidden" } else { "loading-screen" },
            div { class: "loader" }
        }
    }
}

/// Start every visit at the top of the page, dropping any `#section` from the URL.
#[cfg(target_arch = "wasm32")]
fn reset_scroll() {
    use tracing::debug;
    use wasm_bindgen::JsValue;
    use web_sys::ScrollRestoration;

    let Some(win) = web_sys::window() else {
        return;
    };
    if let Ok(history) = win.history() {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
        let location = win.location();
        let has_hash = location.hash().is_ok_and(|hash| !hash.is_empty());
        if has_hash {
            if let Ok(path) = location.pathname() {
                if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
                    debug!(?err, "could not drop the url fragment");
                }
            }
        }
    }
    win.scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(not(target_arch = "wasm32"))]
fn reset_scroll() {}

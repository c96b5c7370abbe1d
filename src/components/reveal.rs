//! Scroll-triggered reveals.
//!
//! On the web every hook owns one `IntersectionObserver` that fires once and
//! disconnects. Other platforms have no viewport to scroll, so everything
//! starts out revealed.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// How much of an element has to be on screen before it counts as seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Sections, the radar chart and fade-in content
    pub const SECTION: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
    pub const TIMELINE: Self = Self {
        threshold: 0.3,
        root_margin: "0px",
    };
    pub const STATS: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
    };
}

/// Whether the element with `element_id` has entered the viewport. Latches at `true`.
pub fn use_in_view(element_id: String, options: RevealOptions) -> Signal<bool> {
    let seen = use_signal(|| !cfg!(target_arch = "wasm32"));

    #[cfg(target_arch = "wasm32")]
    {
        let watch = use_hook(|| Rc::new(RefCell::new(None::<Watch>)));
        let on_drop = watch.clone();
        use_drop(move || {
            on_drop.borrow_mut().take();
        });
        use_effect(move || {
            if *seen.peek() || watch.borrow().is_some() {
                return;
            }
            match Watch::start(&element_id, options, seen) {
                Some(started) => *watch.borrow_mut() = Some(started),
                None => debug!(element_id = %element_id, "nothing to observe, revealing now"),
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (element_id, options);

    seen
}

#[cfg(target_arch = "wasm32")]
struct Watch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Watch {
    /// Returns `None` (and reveals straight away) when the browser can't observe the element.
    fn start(element_id: &str, options: RevealOptions, mut seen: Signal<bool>) -> Option<Self> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id));
        let Some(element) = element else {
            seen.set(true);
            return None;
        };

        let runtime = Runtime::current();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let _guard = RuntimeGuard::new(runtime.clone());
                let hit = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if hit {
                    observer.disconnect();
                    seen.set(true);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(_) => {
                    seen.set(true);
                    return None;
                }
            };
        observer.observe(&element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A page section that zooms in the first time it scrolls into view
#[component]
pub fn RevealSection(id: String, class: String, children: Element) -> Element {
    let seen = use_in_view(id.clone(), RevealOptions::SECTION);
    let state = if seen() { "revealed" } else { "" };

    rsx! {
        section { id: "{id}", class: "{class} reveal {state}", {children} }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use dioxus::core::VirtualDom;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn sections_reveal_earlier_than_stats() {
        assert!(RevealOptions::SECTION.threshold < RevealOptions::TIMELINE.threshold);
        assert!(RevealOptions::TIMELINE.threshold < RevealOptions::STATS.threshold);
        assert_eq!(RevealOptions::SECTION.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn without_a_viewport_everything_is_revealed() {
        #[derive(Clone)]
        struct Seen(Rc<Cell<Option<bool>>>);

        #[allow(non_snake_case)]
        fn Host(props: Seen) -> Element {
            let seen = use_in_view("radarChart".to_string(), RevealOptions::SECTION);
            props.0.set(Some(seen()));
            rsx! {}
        }

        let cell = Rc::new(Cell::new(None));
        let mut dom = VirtualDom::new_with_props(Host, Seen(cell.clone()));
        dom.rebuild_in_place();
        assert_eq!(cell.get(), Some(true));
    }
}

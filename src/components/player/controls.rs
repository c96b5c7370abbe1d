use super::PlayerHandle;
use crate::components::Icon;
use crate::playback::PlayerView;
use dioxus::prelude::*;

/// Time label, transport buttons and the minimize toggle
#[component]
pub(super) fn TransportControls(view: PlayerView) -> Element {
    let handle = use_context::<PlayerHandle>();

    let on_prev = move |evt: MouseEvent| {
        evt.stop_propagation();
        handle.dispatch(|controller| controller.previous_track());
    };
    let on_toggle = move |evt: MouseEvent| {
        evt.stop_propagation();
        handle.dispatch(|controller| controller.toggle_play());
    };
    let on_next = move |evt: MouseEvent| {
        evt.stop_propagation();
        handle.dispatch(|controller| controller.next_track());
    };
    let on_minimize = move |evt: MouseEvent| {
        evt.stop_propagation();
        handle.update(|controller| controller.toggle_minimize());
    };

    rsx! {
        div { class: "music-player-controls",
            span { class: "music-player-time",
                span { class: "current-time", "{view.elapsed}" }
                " / {view.total}"
            }
            button {
                class: "music-player-btn prev-btn",
                title: "Previous",
                onclick: on_prev,
                Icon { name: "prev".to_string(), class: "w-4 h-4".to_string() }
            }
            button {
                class: "music-player-play-btn play-pause-btn",
                title: "{view.play_label()}",
                onclick: on_toggle,
                Icon {
                    name: view.play_icon().to_string(),
                    class: "w-5 h-5".to_string(),
                }
            }
            button {
                class: "music-player-btn next-btn",
                title: "Next",
                onclick: on_next,
                Icon { name: "next".to_string(), class: "w-4 h-4".to_string() }
            }
            button {
                class: "music-player-btn toggle-btn",
                title: "Minimize",
                onclick: on_minimize,
                Icon { name: "minimize".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}

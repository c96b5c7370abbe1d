use crate::components::audio_manager::PageAudio;
use crate::components::Icon;
use crate::config::PlayerSettings;
use crate::playback::{
    EventSink, Followup, MediaEvent, MediaOutput, PlayAttempt, PlaybackController, PlayerView,
    Playlist,
};
use crate::utils::sleep;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use futures_util::StreamExt;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};

mod controls;

use controls::TransportControls;

pub type WidgetController = PlaybackController<PageAudio>;

/// Shared handle to the widget's controller. `None` until the audio element is attached.
pub struct PlayerHandle<M: MediaOutput + 'static = PageAudio>(
    pub Signal<Option<PlaybackController<M>>>,
);

impl<M: MediaOutput + 'static> Clone for PlayerHandle<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MediaOutput + 'static> Copy for PlayerHandle<M> {}

impl<M: MediaOutput + 'static> PlayerHandle<M> {
    pub fn view(&self) -> Option<PlayerView> {
        self.0.read().as_ref().map(|controller| controller.view())
    }

    /// Run a command and carry out whatever it left pending.
    pub fn dispatch(self, command: impl FnOnce(&mut PlaybackController<M>) -> Followup) {
        let mut slot = self.0;
        let mut guard = slot.write();
        let Some(controller) = guard.as_mut() else {
            return;
        };
        let followup = command(controller);
        drop(guard);
        drive(self, followup);
    }

    /// Run a command that never leaves work behind.
    pub fn update(self, command: impl FnOnce(&mut PlaybackController<M>)) {
        let mut slot = self.0;
        let mut guard = slot.write();
        if let Some(controller) = guard.as_mut() {
            command(controller);
        }
    }
}

fn drive<M: MediaOutput + 'static>(handle: PlayerHandle<M>, followup: Followup) {
    match followup {
        Followup::Idle => {}
        Followup::AwaitReady(wait) => {
            spawn(async move {
                sleep(wait.timeout()).await;
                handle.dispatch(|controller| controller.ready_timeout(wait));
            });
        }
        Followup::Play(PlayAttempt { ticket, outcome }) => {
            spawn(async move {
                let result = outcome.await;
                handle.update(|controller| controller.settle_play(ticket, result));
            });
        }
    }
}

/// Floating music widget, fixed to the corner of the page
#[component]
pub fn MusicPlayerWidget() -> Element {
    let settings = use_context::<PlayerSettings>();
    let slot = use_signal(|| None::<WidgetController>);
    let handle = use_context_provider(|| PlayerHandle(slot));

    let events = use_coroutine(move |mut rx: UnboundedReceiver<MediaEvent>| async move {
        while let Some(event) = rx.next().await {
            handle.dispatch(|controller| controller.handle_event(event));
        }
    });

    use_effect(move || {
        if handle.0.peek().is_some() {
            return;
        }
        let Some(media) = PageAudio::attach(&settings.audio_element_id) else {
            debug!("no audio output on this platform, music widget disabled");
            return;
        };
        let playlist = match Playlist::from_settings(&settings) {
            Ok(playlist) => playlist,
            Err(err) => {
                warn!(error = %err, "music widget has nothing to play");
                return;
            }
        };

        let runtime = Runtime::current();
        let sink: EventSink = Rc::new(move |event: MediaEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            events.send(event);
        });

        let mut controller = PlaybackController::new(media, playlist, sink).with_timeouts(
            Duration::from_millis(settings.autoplay_timeout_ms),
            Duration::from_millis(settings.resume_timeout_ms),
        );
        let followup = controller.initialize();
        let mut slot = handle.0;
        slot.set(Some(controller));
        drive(handle, followup);
    });

    let Some(view) = handle.view() else {
        return rsx! {};
    };
    if !view.is_visible {
        return rsx! {};
    }

    let on_surface_click = move |_| {
        if view_is_minimized(handle) {
            handle.update(|controller| controller.expand());
        }
    };
    let on_close = move |evt: MouseEvent| {
        evt.stop_propagation();
        handle.update(|controller| controller.close());
    };
    let on_expand = move |evt: MouseEvent| {
        evt.stop_propagation();
        handle.update(|controller| controller.toggle_minimize());
    };
    let on_seek = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            handle.update(|controller| controller.seek(percent / 100.0));
        }
    };

    let cover_style = format!(
        "background-image: url('{}'); background-size: cover; background-position: center;",
        view.thumbnail_uri
    );

    rsx! {
        div { class: "{view.widget_class()}", onclick: on_surface_click,
            div { class: "music-player-header",
                span { class: "music-player-title", "Now Playing" }
                button {
                    class: "music-player-close",
                    title: "Close",
                    onclick: on_close,
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            div { class: "music-player-content",
                div { class: "music-player-cover", style: "{cover_style}",
                    if view.thumbnail_uri.is_empty() {
                        Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                    }
                }
                div { class: "music-player-info",
                    div {
                        p { class: "music-player-song-title", "{view.title}" }
                        p { class: "music-player-artist", "{view.artist}" }
                    }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: view.progress_percent,
                        class: "music-player-progress",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        oninput: on_seek,
                    }
                }
            }
            TransportControls { view: view.clone() }
            button {
                class: "music-player-toggle-btn",
                title: "Expand",
                onclick: on_expand,
                Icon { name: "expand".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}

fn view_is_minimized(handle: PlayerHandle) -> bool {
    handle
        .0
        .peek()
        .as_ref()
        .is_some_and(|controller| controller.is_minimized())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::playback::mock::{event_queue, MockMedia, MockState};
    use crate::playback::PlaybackPhase;
    use dioxus::core::{NoOpMutations, ScopeId, VirtualDom};
    use std::cell::{Cell, RefCell};

    type TestHandle = PlayerHandle<MockMedia>;

    #[derive(Clone)]
    struct Fixture {
        controller: Rc<RefCell<Option<PlaybackController<MockMedia>>>>,
        handle: Rc<Cell<Option<TestHandle>>>,
    }

    #[allow(non_snake_case)]
    fn Host(fixture: Fixture) -> Element {
        let slot = use_signal(|| fixture.controller.borrow_mut().take());
        fixture.handle.set(Some(PlayerHandle(slot)));
        // subscribe so controller writes rerender the host
        let _phase = slot.read().as_ref().map(|controller| controller.phase());
        rsx! {}
    }

    fn mount(play_timeout: Duration) -> (VirtualDom, TestHandle, Rc<RefCell<MockState>>) {
        let files = ["First.mp3", "Second.mp3"];
        let playlist = Playlist::from_files(&files[..], &PlayerSettings::default()).expect("playlist");
        let (media, state) = MockMedia::new();
        let (sink, _events) = event_queue();
        let controller =
            PlaybackController::new(media, playlist, sink).with_timeouts(play_timeout, play_timeout);

        let fixture = Fixture {
            controller: Rc::new(RefCell::new(Some(controller))),
            handle: Rc::new(Cell::new(None)),
        };
        let mut dom = VirtualDom::new_with_props(Host, fixture.clone());
        dom.rebuild_in_place();
        let handle = fixture.handle.get().expect("host rendered");
        (dom, handle, state)
    }

    fn phase(dom: &VirtualDom, handle: TestHandle) -> Option<PlaybackPhase> {
        dom.in_runtime(|| handle.0.peek().as_ref().map(|controller| controller.phase()))
    }

    async fn pump_until(dom: &mut VirtualDom, mut done: impl FnMut(&VirtualDom) -> bool) -> bool {
        for _ in 0..100 {
            if done(&*dom) {
                return true;
            }
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
        done(&*dom)
    }

    #[test]
    fn update_reaches_the_controller() {
        let (dom, handle, state) = mount(Duration::from_millis(5));

        dom.in_runtime(|| handle.update(|controller| controller.toggle_minimize()));
        let minimized = dom.in_runtime(|| handle.view().map(|view| view.is_minimized));
        assert_eq!(minimized, Some(true));

        dom.in_runtime(|| handle.update(|controller| controller.close()));
        let visible = dom.in_runtime(|| handle.view().map(|view| view.is_visible));
        assert_eq!(visible, Some(false));
        assert_eq!(state.borrow().pauses, 0);
    }

    #[test]
    fn update_on_empty_slot_is_noop() {
        #[derive(Clone)]
        struct Empty(Rc<Cell<Option<TestHandle>>>);

        #[allow(non_snake_case)]
        fn EmptyHost(props: Empty) -> Element {
            let slot = use_signal(|| None::<PlaybackController<MockMedia>>);
            props.0.set(Some(PlayerHandle(slot)));
            rsx! {}
        }

        let cell = Rc::new(Cell::new(None));
        let mut dom = VirtualDom::new_with_props(EmptyHost, Empty(cell.clone()));
        dom.rebuild_in_place();
        let handle = cell.get().expect("host rendered");

        let mut ran = false;
        dom.in_runtime(|| handle.update(|_| ran = true));
        assert!(!ran);
        assert!(dom.in_runtime(|| handle.view()).is_none());
    }

    #[tokio::test]
    async fn ready_timeout_drives_autoplay_to_playing() {
        let (mut dom, handle, state) = mount(Duration::from_millis(5));

        dom.in_scope(ScopeId::ROOT, || {
            handle.dispatch(|controller| controller.initialize())
        });
        assert_eq!(phase(&dom, handle), Some(PlaybackPhase::StoppedAtLoad));
        assert_eq!(state.borrow().plays, 0);

        // no CanPlay ever arrives, the armed wait has to fire on its own
        let playing = pump_until(&mut dom, |dom| {
            phase(dom, handle) == Some(PlaybackPhase::Playing)
        })
        .await;
        assert!(playing);
        assert_eq!(state.borrow().plays, 1);
        assert_eq!(state.borrow().loads, vec!["./assets/music/First.mp3"]);
    }

    #[tokio::test]
    async fn blocked_attempt_settles_through_update() {
        let (mut dom, handle, state) = mount(Duration::from_millis(5));
        state.borrow_mut().play_result = Err(crate::playback::MediaError::Blocked);

        dom.in_scope(ScopeId::ROOT, || {
            handle.dispatch(|controller| controller.toggle_play())
        });
        let settled = pump_until(&mut dom, |dom| {
            phase(dom, handle) == Some(PlaybackPhase::Paused)
        })
        .await;
        assert!(settled);
        let icon = dom.in_runtime(|| handle.view().map(|view| view.play_icon()));
        assert_eq!(icon, Some("play"));
    }
}

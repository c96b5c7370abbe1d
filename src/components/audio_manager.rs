//! Audio Manager - binds the page's single `<audio>` element to the playback core.
//! The element lives outside the component tree so re-renders never restart it.

use crate::playback::{EventSink, MediaError, MediaOutput};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

#[cfg(target_arch = "wasm32")]
use crate::playback::MediaEvent;
#[cfg(target_arch = "wasm32")]
use tracing::{debug, warn};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Find the audio element by id, creating a hidden one on first use
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element(id: &str) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(id) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(id);
    // Only fetch metadata up front, the stream buffers on play
    audio.set_attribute("preload", "metadata").ok()?;

    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
type EventReader = fn(&HtmlAudioElement) -> MediaEvent;

/// The page's audio element seen as a [`MediaOutput`]
#[cfg(target_arch = "wasm32")]
pub struct PageAudio {
    element: HtmlAudioElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl PageAudio {
    pub fn attach(id: &str) -> Option<Self> {
        let element = get_or_create_audio_element(id)?;
        Some(Self {
            element,
            listeners: Vec::new(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaOutput for PageAudio {
    fn bind_events(&mut self, sink: EventSink) {
        if !self.listeners.is_empty() {
            debug!("audio listeners already bound");
            return;
        }

        let readers: [(&'static str, EventReader); 6] = [
            ("timeupdate", |audio| MediaEvent::TimeUpdate(audio.current_time())),
            ("loadedmetadata", |audio| {
                MediaEvent::LoadedMetadata(audio.duration())
            }),
            ("canplay", |_| MediaEvent::CanPlay),
            ("play", |_| MediaEvent::Play),
            ("pause", |_| MediaEvent::Pause),
            ("ended", |_| MediaEvent::Ended),
        ];

        for (name, read) in readers {
            let sink = sink.clone();
            let audio = self.element.clone();
            let closure = Closure::wrap(Box::new(move || sink(read(&audio))) as Box<dyn FnMut()>);
            if let Err(err) = self
                .element
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                warn!(event = name, error = ?err, "failed to bind audio listener");
                continue;
            }
            self.listeners.push((name, closure));
        }
    }

    fn load(&mut self, uri: &str) {
        self.element.set_src(uri);
        self.element.load();
    }

    fn play(&mut self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        match self.element.play() {
            Ok(promise) => async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| media_error_from_js(&err))
            }
            .boxed_local(),
            Err(err) => futures_util::future::ready(Err(media_error_from_js(&err))).boxed_local(),
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.element.pause() {
            warn!(error = ?err, "pause failed");
        }
    }

    fn set_position(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for PageAudio {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn media_error_from_js(err: &JsValue) -> MediaError {
    let field = |key: &str| {
        js_sys::Reflect::get(err, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    };
    let name = field("name");
    let message = field("message");
    let detail = if message.is_empty() {
        format!("{err:?}")
    } else {
        message
    };
    MediaError::from_dom_name(&name, &detail)
}

/// Desktop builds have no page to host an `<audio>` element.
#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub struct PageAudio;

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
impl PageAudio {
    pub fn attach(_id: &str) -> Option<Self> {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaOutput for PageAudio {
    fn bind_events(&mut self, _sink: EventSink) {}

    fn load(&mut self, _uri: &str) {}

    fn play(&mut self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        futures_util::future::ready(Err(MediaError::Unavailable)).boxed_local()
    }

    fn pause(&mut self) {}

    fn set_position(&mut self, _seconds: f64) {}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_audio_is_unavailable() {
        assert!(PageAudio::attach("audioPlayer").is_none());
        let outcome = PageAudio.play().now_or_never().expect("ready");
        assert_eq!(outcome, Err(MediaError::Unavailable));
    }
}

//! The seam between the controller and whatever actually decodes audio.

use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use thiserror::Error;

/// Notifications raised by the media resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Current position in seconds
    TimeUpdate(f64),
    /// Duration in seconds, as reported once metadata is known
    LoadedMetadata(f64),
    /// Enough data is buffered to start playback
    CanPlay,
    Play,
    Pause,
    Ended,
}

pub type EventSink = Rc<dyn Fn(MediaEvent)>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MediaError {
    /// Playback start was refused by the host (autoplay policy)
    #[error("playback blocked by autoplay policy")]
    Blocked,
    /// The attempt was superseded by a new source or a pause
    #[error("playback attempt aborted")]
    Aborted,
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("media output unavailable")]
    Unavailable,
}

impl MediaError {
    /// Classify a rejected `play()` by the DOMException name it carried.
    pub fn from_dom_name(name: &str, detail: &str) -> Self {
        match name {
            "NotAllowedError" => MediaError::Blocked,
            "AbortError" => MediaError::Aborted,
            "" => MediaError::Rejected(detail.to_string()),
            other => MediaError::Rejected(format!("{other}: {detail}")),
        }
    }
}

/// Handle to the single audio output the widget drives.
///
/// `play` resolves once the host has either started output or refused to;
/// the remaining commands are fire-and-forget.
pub trait MediaOutput {
    /// Register `sink` for every [`MediaEvent`]. Called once per output.
    fn bind_events(&mut self, sink: EventSink);

    fn load(&mut self, uri: &str);

    fn play(&mut self) -> LocalBoxFuture<'static, Result<(), MediaError>>;

    fn pause(&mut self);

    fn set_position(&mut self, seconds: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names_map_to_error_kinds() {
        assert_eq!(
            MediaError::from_dom_name("NotAllowedError", "user didn't interact"),
            MediaError::Blocked
        );
        assert_eq!(
            MediaError::from_dom_name("AbortError", "new load request"),
            MediaError::Aborted
        );
        assert_eq!(
            MediaError::from_dom_name("NotSupportedError", "no source"),
            MediaError::Rejected("NotSupportedError: no source".to_string())
        );
        assert_eq!(
            MediaError::from_dom_name("", "opaque"),
            MediaError::Rejected("opaque".to_string())
        );
    }
}

//! Playback controller - owns the playlist, the session state and the media output.
//!
//! Every command runs synchronously. Anything that has to wait (a `play()`
//! outcome, the resource becoming ready) is handed back as a [`Followup`]
//! which the host drives and reports back through [`PlaybackController::settle_play`]
//! or [`PlaybackController::ready_timeout`].

use super::media::{EventSink, MediaError, MediaEvent, MediaOutput};
use super::track::{Playlist, Track};
use super::view::PlayerView;
use crate::utils::format_time;
use futures_util::future::LocalBoxFuture;
use std::time::Duration;
use tracing::{debug, info, warn};

const AUTOPLAY_TIMEOUT: Duration = Duration::from_millis(800);
const RESUME_TIMEOUT: Duration = Duration::from_millis(100);

/// Playback dimension of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// A track was just loaded and nothing has been attempted on it yet
    #[default]
    StoppedAtLoad,
    Playing,
    Paused,
}

/// Identifies one `play()` attempt. Outcomes for any other ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket {
    id: u64,
    generation: u64,
}

/// A playback start armed for one loaded track, pending readiness or timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyWait {
    generation: u64,
    timeout: Duration,
}

impl ReadyWait {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

pub struct PlayAttempt {
    pub ticket: PlayTicket,
    pub outcome: LocalBoxFuture<'static, Result<(), MediaError>>,
}

/// Work the host has to carry out after a command.
#[must_use]
pub enum Followup {
    Idle,
    /// Call `ready_timeout` once the wait's timeout has elapsed
    AwaitReady(ReadyWait),
    /// Await the outcome and hand it to `settle_play`
    Play(PlayAttempt),
}

impl std::fmt::Debug for Followup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Followup::Idle => write!(f, "Idle"),
            Followup::AwaitReady(wait) => write!(f, "AwaitReady({wait:?})"),
            Followup::Play(attempt) => write!(f, "Play({:?})", attempt.ticket),
        }
    }
}

pub struct PlaybackController<M: MediaOutput> {
    media: M,
    playlist: Playlist,
    current_index: usize,
    phase: PlaybackPhase,
    is_minimized: bool,
    is_visible: bool,
    current_time: f64,
    duration: f64,
    generation: u64,
    last_ticket: u64,
    in_flight: Option<PlayTicket>,
    /// Generation of an attempt paused before it settled. Its `play` event is still on the way.
    cancelled: Option<u64>,
    awaiting_ready: Option<ReadyWait>,
    autoplay_timeout: Duration,
    resume_timeout: Duration,
}

impl<M: MediaOutput> PlaybackController<M> {
    /// Takes ownership of `media` and binds its listeners to `sink`.
    /// This is the only place listeners are ever registered.
    pub fn new(mut media: M, playlist: Playlist, sink: EventSink) -> Self {
        media.bind_events(sink);
        Self {
            media,
            playlist,
            current_index: 0,
            phase: PlaybackPhase::StoppedAtLoad,
            is_minimized: false,
            is_visible: true,
            current_time: 0.0,
            duration: 0.0,
            generation: 0,
            last_ticket: 0,
            in_flight: None,
            cancelled: None,
            awaiting_ready: None,
            autoplay_timeout: AUTOPLAY_TIMEOUT,
            resume_timeout: RESUME_TIMEOUT,
        }
    }

    pub fn with_timeouts(mut self, autoplay: Duration, resume: Duration) -> Self {
        self.autoplay_timeout = autoplay;
        self.resume_timeout = resume;
        self
    }

    /// Load the first track and arm the autoplay attempt.
    pub fn initialize(&mut self) -> Followup {
        self.reload(0);
        info!(
            tracks = self.playlist.len(),
            title = %self.current_track().title,
            "music player initialized"
        );
        self.arm_ready(self.autoplay_timeout)
    }

    /// Point the output at `index`. Out-of-range indices are ignored.
    pub fn load_track(&mut self, index: usize) -> Followup {
        if index >= self.playlist.len() {
            debug!(index, len = self.playlist.len(), "ignoring out-of-range track");
            return Followup::Idle;
        }
        self.change_track(index)
    }

    pub fn next_track(&mut self) -> Followup {
        let index = self.playlist.next_index(self.current_index);
        self.change_track(index)
    }

    pub fn previous_track(&mut self) -> Followup {
        let index = self.playlist.previous_index(self.current_index);
        self.change_track(index)
    }

    pub fn toggle_play(&mut self) -> Followup {
        if self.phase == PlaybackPhase::Playing || self.in_flight.is_some() {
            self.media.pause();
            if let Some(ticket) = self.in_flight.take() {
                self.cancelled = Some(ticket.generation);
            }
            self.awaiting_ready = None;
            self.phase = PlaybackPhase::Paused;
            return Followup::Idle;
        }
        self.start_playback()
    }

    /// Jump to `fraction` of the current track. Ignored while the duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        if !(self.duration.is_finite() && self.duration > 0.0) || !fraction.is_finite() {
            return;
        }
        let position = fraction.clamp(0.0, 1.0) * self.duration;
        self.media.set_position(position);
        self.current_time = position;
    }

    pub fn toggle_minimize(&mut self) {
        self.is_minimized = !self.is_minimized;
    }

    pub fn expand(&mut self) {
        self.is_minimized = false;
    }

    /// Hide the surface. Playback carries on.
    pub fn close(&mut self) {
        self.is_visible = false;
    }

    pub fn handle_event(&mut self, event: MediaEvent) -> Followup {
        match event {
            MediaEvent::TimeUpdate(seconds) => {
                if seconds.is_finite() && seconds >= 0.0 {
                    self.current_time = seconds;
                }
                Followup::Idle
            }
            MediaEvent::LoadedMetadata(seconds) => {
                self.duration = if seconds.is_finite() && seconds > 0.0 {
                    seconds
                } else {
                    0.0
                };
                Followup::Idle
            }
            MediaEvent::CanPlay => match self.awaiting_ready {
                Some(wait) if wait.generation == self.generation => self.start_playback(),
                _ => Followup::Idle,
            },
            MediaEvent::Play => {
                if self.cancelled.take() == Some(self.generation) {
                    debug!("ignoring play event from a cancelled attempt");
                } else {
                    self.phase = PlaybackPhase::Playing;
                }
                Followup::Idle
            }
            MediaEvent::Pause => {
                debug!("media paused");
                Followup::Idle
            }
            MediaEvent::Ended => {
                info!(title = %self.current_track().title, "track ended, moving to next");
                self.next_track()
            }
        }
    }

    /// The readiness wait elapsed without a `CanPlay`; start anyway if still armed.
    pub fn ready_timeout(&mut self, wait: ReadyWait) -> Followup {
        if self.awaiting_ready != Some(wait) || wait.generation != self.generation {
            return Followup::Idle;
        }
        debug!(timeout = ?wait.timeout, "media not ready in time, starting anyway");
        self.start_playback()
    }

    /// Reconcile a finished `play()` attempt. Outcomes for superseded attempts are dropped.
    pub fn settle_play(&mut self, ticket: PlayTicket, outcome: Result<(), MediaError>) {
        if self.in_flight != Some(ticket) {
            debug!(?ticket, ?outcome, "discarding stale play outcome");
            return;
        }
        self.in_flight = None;
        match outcome {
            Ok(()) => self.phase = PlaybackPhase::Playing,
            Err(MediaError::Blocked) => {
                info!("auto-play blocked");
                self.phase = PlaybackPhase::Paused;
            }
            Err(err) => {
                warn!(error = %err, "play error");
                self.phase = PlaybackPhase::Paused;
            }
        }
    }

    pub fn view(&self) -> PlayerView {
        let track = self.current_track();
        let progress_percent = if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        PlayerView {
            title: track.title.clone(),
            artist: track.artist.clone(),
            thumbnail_uri: track.thumbnail_uri.clone(),
            is_playing: self.is_playing(),
            is_minimized: self.is_minimized,
            is_visible: self.is_visible,
            elapsed: format_time(self.current_time),
            total: format_time(self.duration),
            progress_percent,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.wrapped(self.current_index)
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    fn change_track(&mut self, index: usize) -> Followup {
        let resume = self.phase == PlaybackPhase::Playing || self.in_flight.is_some();
        self.reload(index);
        if resume {
            self.arm_ready(self.resume_timeout)
        } else {
            Followup::Idle
        }
    }

    fn reload(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };
        self.media.load(&track.source_uri);
        self.media.set_position(0.0);
        self.current_index = index;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.generation += 1;
        self.in_flight = None;
        self.cancelled = None;
        self.awaiting_ready = None;
        self.phase = PlaybackPhase::StoppedAtLoad;
    }

    fn arm_ready(&mut self, timeout: Duration) -> Followup {
        let wait = ReadyWait {
            generation: self.generation,
            timeout,
        };
        self.awaiting_ready = Some(wait);
        Followup::AwaitReady(wait)
    }

    fn start_playback(&mut self) -> Followup {
        self.awaiting_ready = None;
        self.last_ticket += 1;
        let ticket = PlayTicket {
            id: self.last_ticket,
            generation: self.generation,
        };
        self.in_flight = Some(ticket);
        self.cancelled = None;
        let outcome = self.media.play();
        Followup::Play(PlayAttempt { ticket, outcome })
    }
}

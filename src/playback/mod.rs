//! Playback core for the music widget.
//!
//! Renderer-independent: the controller only talks to a [`MediaOutput`] and
//! hands back [`Followup`]s for the async work the host has to drive.

mod controller;
mod media;
mod track;
mod view;

#[cfg(test)]
pub(crate) mod mock;

pub use controller::*;
pub use media::*;
pub use track::*;
pub use view::*;

//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod icons;
mod loading;
mod navigation;
mod particles;
mod player;
mod reveal;
mod visitor_counter;
pub mod views;

pub use app::*;
pub use icons::*;
pub use loading::*;
pub use navigation::*;
pub use particles::*;
pub use player::*;
pub use reveal::*;
pub use visitor_counter::*;

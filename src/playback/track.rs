use crate::config::PlayerSettings;
use crate::utils::{display_title, thumbnail_stem};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlaylistError {
    #[error("playlist has no tracks")]
    Empty,
}

/// One playable item. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub source_uri: String,
    pub thumbnail_uri: String,
}

impl Track {
    pub fn from_file(file: &str, settings: &PlayerSettings) -> Self {
        let music_dir = settings.music_dir.trim_end_matches('/');
        let image_dir = settings.image_dir.trim_end_matches('/');
        Self {
            title: display_title(file),
            artist: settings.artist_label.clone(),
            source_uri: format!("{music_dir}/{file}"),
            thumbnail_uri: format!("{image_dir}/{}.jpg", thumbnail_stem(file)),
        }
    }
}

/// Fixed, ordered, non-empty list of tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self { tracks })
    }

    pub fn from_files<S: AsRef<str>>(
        files: &[S],
        settings: &PlayerSettings,
    ) -> Result<Self, PlaylistError> {
        Self::new(
            files
                .iter()
                .map(|file| Track::from_file(file.as_ref(), settings))
                .collect(),
        )
    }

    pub fn from_settings(settings: &PlayerSettings) -> Result<Self, PlaylistError> {
        Self::from_files(&settings.files, settings)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at `index` modulo the length; never fails since the list is non-empty.
    pub fn wrapped(&self, index: usize) -> &Track {
        &self.tracks[index % self.tracks.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.tracks.len() - 1) % self.tracks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_paths_follow_settings() {
        let settings = PlayerSettings::default();
        let track = Track::from_file("Somebody'S Pleasure.mp3", &settings);
        assert_eq!(track.title, "Somebody'S Pleasure");
        assert_eq!(track.artist, "Your Music");
        assert_eq!(track.source_uri, "./assets/music/Somebody'S Pleasure.mp3");
        assert_eq!(
            track.thumbnail_uri,
            "./assets/images/somebodys_pleasure.jpg"
        );
    }

    #[test]
    fn trailing_slashes_are_not_doubled() {
        let settings = PlayerSettings {
            music_dir: "/media/".to_string(),
            image_dir: "/covers/".to_string(),
            ..PlayerSettings::default()
        };
        let track = Track::from_file("Ordinary.mp3", &settings);
        assert_eq!(track.source_uri, "/media/Ordinary.mp3");
        assert_eq!(track.thumbnail_uri, "/covers/ordinary.jpg");
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let settings = PlayerSettings::default();
        let files: [&str; 0] = [];
        assert_eq!(
            Playlist::from_files(&files, &settings),
            Err(PlaylistError::Empty)
        );
    }

    #[test]
    fn indices_wrap_at_both_ends() {
        let playlist = Playlist::from_settings(&PlayerSettings::default()).expect("playlist");
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.next_index(1), 0);
        assert_eq!(playlist.previous_index(0), 1);
    }
}

/// Read-only snapshot of the widget, produced by the controller for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub title: String,
    pub artist: String,
    pub thumbnail_uri: String,
    pub is_playing: bool,
    pub is_minimized: bool,
    pub is_visible: bool,
    pub elapsed: String,
    pub total: String,
    /// 0-100
    pub progress_percent: f64,
}

impl PlayerView {
    pub fn play_icon(&self) -> &'static str {
        if self.is_playing {
            "pause"
        } else {
            "play"
        }
    }

    pub fn play_label(&self) -> &'static str {
        if self.is_playing {
            "Pause"
        } else {
            "Play"
        }
    }

    pub fn widget_class(&self) -> String {
        let mut class = String::from("music-player-widget");
        if self.is_playing {
            class.push_str(" playing");
        }
        if self.is_minimized {
            class.push_str(" minimized");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(is_playing: bool, is_minimized: bool) -> PlayerView {
        PlayerView {
            title: "Ordinary".to_string(),
            artist: "Your Music".to_string(),
            thumbnail_uri: "./assets/images/ordinary.jpg".to_string(),
            is_playing,
            is_minimized,
            is_visible: true,
            elapsed: "0:00".to_string(),
            total: "0:00".to_string(),
            progress_percent: 0.0,
        }
    }

    #[test]
    fn widget_class_reflects_flags() {
        assert_eq!(view(false, false).widget_class(), "music-player-widget");
        assert_eq!(
            view(true, true).widget_class(),
            "music-player-widget playing minimized"
        );
    }

    #[test]
    fn transport_affordance_follows_play_state() {
        assert_eq!(view(true, false).play_icon(), "pause");
        assert_eq!(view(false, false).play_label(), "Play");
    }
}

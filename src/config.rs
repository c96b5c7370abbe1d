//! Static site configuration: playlist sources, badge target, chart data.

use serde::{Deserialize, Serialize};

/// Where the music widget finds its audio and cover art
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub music_dir: String,
    pub image_dir: String,
    pub artist_label: String,
    pub files: Vec<String>,
    #[serde(default = "default_autoplay_timeout_ms")]
    pub autoplay_timeout_ms: u64,
    #[serde(default = "default_resume_timeout_ms")]
    pub resume_timeout_ms: u64,
    pub audio_element_id: String,
}

fn default_autoplay_timeout_ms() -> u64 {
    800
}

fn default_resume_timeout_ms() -> u64 {
    100
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            music_dir: "./assets/music".to_string(),
            image_dir: "./assets/images".to_string(),
            artist_label: "Your Music".to_string(),
            files: vec![
                "Ordinary.mp3".to_string(),
                "Somebody'S Pleasure.mp3".to_string(),
            ],
            autoplay_timeout_ms: default_autoplay_timeout_ms(),
            resume_timeout_ms: default_resume_timeout_ms(),
            audio_element_id: "audioPlayer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0-100
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: f64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneKind {
    Certificate,
    Achievement,
}

impl MilestoneKind {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneKind::Certificate => "chứng chỉ",
            MilestoneKind::Achievement => "thành tích",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            MilestoneKind::Certificate => "timeline-card certificate-card",
            MilestoneKind::Achievement => "timeline-card achievement-card",
        }
    }
}

/// One entry on the certificates timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub kind: MilestoneKind,
}

/// Everything on the page that is content rather than behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub owner: String,
    pub tagline: String,
    pub site_url: String,
    pub badge_count_color: String,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let skill = |name: &str, value: f64| Skill {
            name: name.to_string(),
            value,
        };
        let milestone = |year: &str, title: &str, kind: MilestoneKind| Milestone {
            year: year.to_string(),
            title: title.to_string(),
            kind,
        };
        let stat = |label: &str, target: f64, suffix: &str| Stat {
            label: label.to_string(),
            target,
            suffix: suffix.to_string(),
        };
        Self {
            owner: "Hayyie".to_string(),
            tagline: "Marketing, content and a bit of code.".to_string(),
            site_url: "https://portfolio.hayyie.click/".to_string(),
            badge_count_color: "#263759".to_string(),
            skills: vec![
                skill("Giao tiếp", 90.0),
                skill("Quản lý thời gian", 85.0),
                skill("Làm việc nhóm", 88.0),
                skill("Tư duy phản biện", 82.0),
                skill("Marketing", 70.0),
                skill("Sáng tạo", 85.0),
            ],
            stats: vec![
                stat("Chứng chỉ", 12.0, "+"),
                stat("Thành tích", 5.0, ""),
                stat("GPA", 3.6, ""),
            ],
            milestones: vec![
                milestone("2022", "Google Digital Marketing", MilestoneKind::Certificate),
                milestone("2023", "Giải Nhất cuộc thi Ý tưởng Marketing", MilestoneKind::Achievement),
                milestone("2023", "HubSpot Content Marketing", MilestoneKind::Certificate),
                milestone("2024", "Sinh viên 5 tốt", MilestoneKind::Achievement),
            ],
        }
    }
}

//! Visitor counter backed by the visitorbadge.io SVG endpoint.

use crate::config::SiteSettings;
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use thiserror::Error;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const BADGE_ENDPOINT: &str = "https://api.visitorbadge.io/api/visitors";
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("badge request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("badge status {0}")]
    Status(u16),
}

/// What the footer counter shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitorCount {
    #[default]
    Loading,
    Count(u64),
    /// The request never completed
    Unavailable,
    /// The badge service answered with an error status; the counter stays empty
    Hidden,
}

impl VisitorCount {
    pub fn from_fetch(result: &Result<u64, BadgeError>) -> Self {
        match result {
            Ok(count) => VisitorCount::Count(*count),
            Err(BadgeError::Status(_)) => VisitorCount::Hidden,
            Err(BadgeError::Request(_)) => VisitorCount::Unavailable,
        }
    }

    pub fn is_shown(&self) -> bool {
        *self != VisitorCount::Hidden
    }

    pub fn label(&self) -> String {
        match self {
            VisitorCount::Loading => "...".to_string(),
            VisitorCount::Count(count) => count.to_string(),
            VisitorCount::Unavailable => "--".to_string(),
            VisitorCount::Hidden => String::new(),
        }
    }
}

pub fn visitor_badge_url(site: &SiteSettings) -> String {
    format!(
        "{BADGE_ENDPOINT}?path={}&countColor={}",
        urlencoding::encode(&site.site_url),
        urlencoding::encode(&site.badge_count_color)
    )
}

/// The badge renders its number as the first all-digit text node.
pub fn parse_badge_count(svg: &str) -> u64 {
    svg.split('>')
        .skip(1)
        .filter_map(|segment| segment.split('<').next())
        .map(str::trim)
        .find(|text| !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|text| text.parse().ok())
        .unwrap_or(0)
}

pub async fn fetch_visitor_count(site: &SiteSettings) -> Result<u64, BadgeError> {
    let request = HTTP_CLIENT.get(visitor_badge_url(site));
    #[cfg(not(target_arch = "wasm32"))]
    let request = request.timeout(REQUEST_TIMEOUT);

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(BadgeError::Status(response.status().as_u16()));
    }
    let body = response.text().await?;
    Ok(parse_badge_count(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_url_encodes_site() {
        let url = visitor_badge_url(&SiteSettings::default());
        assert_eq!(
            url,
            "https://api.visitorbadge.io/api/visitors?path=https%3A%2F%2Fportfolio.hayyie.click%2F&countColor=%23263759"
        );
    }

    #[test]
    fn parses_count_from_svg() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><g><text x="5">visitors</text><text x="70"> 1234 </text></g></svg>"##;
        assert_eq!(parse_badge_count(svg), 1234);
    }

    #[test]
    fn missing_count_is_zero() {
        assert_eq!(parse_badge_count("<svg><text>visitors</text></svg>"), 0);
        assert_eq!(parse_badge_count(""), 0);
    }

    #[test]
    fn attribute_digits_are_not_counts() {
        let svg = r#"<svg width="120"><rect height="20"></rect><text>7</text></svg>"#;
        assert_eq!(parse_badge_count(svg), 7);
    }

    #[test]
    fn count_labels() {
        assert_eq!(VisitorCount::Count(42).label(), "42");
        assert_eq!(VisitorCount::Unavailable.label(), "--");
        assert!(VisitorCount::Unavailable.is_shown());
    }

    #[test]
    fn error_status_leaves_counter_empty() {
        let rejected = VisitorCount::from_fetch(&Err(BadgeError::Status(503)));
        assert_eq!(rejected, VisitorCount::Hidden);
        assert!(!rejected.is_shown());
        assert_eq!(rejected.label(), "");

        assert_eq!(VisitorCount::from_fetch(&Ok(17)), VisitorCount::Count(17));
    }
}

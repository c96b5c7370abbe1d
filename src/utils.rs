/// Utility helpers for the portfolio site
use std::time::Duration;

/// Derive the cover-art file stem for an audio file name.
/// Drops the extension, lowercases, removes apostrophes (ASCII and typographic)
/// and converts each run of whitespace into a single underscore. Edge whitespace
/// is converted too, so `" a "` becomes `"_a_"`.
pub fn thumbnail_stem<S: AsRef<str>>(file_name: S) -> String {
    let file_name = file_name.as_ref();
    let base = match file_name.rsplit_once('.') {
        Some((base, _ext)) if !base.is_empty() => base,
        _ => file_name,
    };
    let lowered = base.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut prev_space = false;

    for ch in lowered.chars() {
        if ch == '\'' || ch == '\u{2019}' || ch == '\u{2018}' {
            continue;
        }
        if ch.is_whitespace() {
            if !prev_space {
                out.push('_');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }

    out
}

/// Strip the extension from a file name, keeping its original casing.
pub fn display_title<S: AsRef<str>>(file_name: S) -> String {
    let file_name = file_name.as_ref();
    match file_name.rsplit_once('.') {
        Some((base, _ext)) if !base.is_empty() => base.to_string(),
        _ => file_name.to_string(),
    }
}

/// Format a position in seconds as `M:SS`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32)
        .await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

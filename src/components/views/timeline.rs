use crate::components::{use_in_view, RevealOptions};
use crate::config::{Milestone, SiteSettings, Stat};
use crate::utils::sleep;
use dioxus::prelude::*;
use std::time::Duration;
use tracing::info;

const COUNTER_STEPS: u32 = 50;
const COUNTER_INTERVAL: Duration = Duration::from_millis(30);
const CARD_PRESS: Duration = Duration::from_millis(150);
const STATS_ID: &str = "timelineStats";

/// Intermediate counter values from just above zero up to exactly `target`.
pub fn counter_frames(target: f64, steps: u32) -> impl Iterator<Item = f64> {
    let steps = if target.is_finite() && target > 0.0 {
        steps.max(1)
    } else {
        1
    };
    let target = if target.is_finite() { target } else { 0.0 };
    (1..=steps).map(move |step| {
        if step == steps {
            target
        } else {
            target * f64::from(step) / f64::from(steps)
        }
    })
}

/// Whole-number targets count in integers, fractional ones keep one decimal.
pub fn format_counter(value: f64, target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Height of the timeline's progress bar once `revealed` of `total` items have been seen.
pub fn timeline_progress_percent(revealed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (revealed.min(total) as f64 / total as f64) * 100.0
}

/// Milestones in order, with a progress bar that grows as they scroll into view
#[component]
pub fn Timeline() -> Element {
    let site = use_context::<SiteSettings>();
    let revealed = use_signal(|| 0usize);
    let total = site.milestones.len();
    let progress = timeline_progress_percent(revealed(), total);

    rsx! {
        div { class: "timeline",
            div { class: "timeline-line",
                div { class: "timeline-progress", style: "height: {progress}%" }
            }
            for (index, milestone) in site.milestones.iter().cloned().enumerate() {
                TimelineItem { key: "{index}", index, milestone, revealed }
            }
            div { class: "timeline-end" }
        }
    }
}

#[component]
fn TimelineItem(index: usize, milestone: Milestone, revealed: Signal<usize>) -> Element {
    let id = format!("timeline-item-{index}");
    let seen = use_in_view(id.clone(), RevealOptions::TIMELINE);
    let mut counted = use_signal(|| false);
    let mut pressed = use_signal(|| false);
    let mut revealed = revealed;

    use_effect(move || {
        if seen() && !*counted.peek() {
            counted.set(true);
            revealed += 1;
        }
    });

    let kind = milestone.kind;
    let title = milestone.title.clone();
    let on_card = move |_| {
        info!(kind = kind.label(), title = %title, "Xem chi tiết");
        pressed.set(true);
        spawn(async move {
            sleep(CARD_PRESS).await;
            pressed.set(false);
        });
    };

    let item_class = if seen() { "timeline-item fade-in" } else { "timeline-item" };
    let card_class = if pressed() {
        format!("{} pressed", kind.card_class())
    } else {
        kind.card_class().to_string()
    };

    rsx! {
        div { id: "{id}", class: "{item_class}",
            span { class: "timeline-year", "{milestone.year}" }
            div { class: "{card_class}", onclick: on_card,
                h3 { "{milestone.title}" }
                span { class: "timeline-kind", "{kind.label()}" }
            }
        }
    }
}

/// Counters that run up to their targets the first time the block is half on screen
#[component]
pub fn TimelineStats() -> Element {
    let site = use_context::<SiteSettings>();
    let seen = use_in_view(STATS_ID.to_string(), RevealOptions::STATS);
    let state = if seen() { "revealed" } else { "" };

    rsx! {
        div { id: STATS_ID, class: "timeline-stats grid reveal {state}",
            for stat in site.stats.iter().cloned() {
                StatCounter { key: "{stat.label}", stat: stat.clone(), active: seen }
            }
        }
    }
}

#[component]
fn StatCounter(stat: Stat, active: Signal<bool>) -> Element {
    let target = stat.target;
    let mut shown = use_signal(|| 0.0f64);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !active() || *started.peek() {
            return;
        }
        started.set(true);
        spawn(async move {
            for value in counter_frames(target, COUNTER_STEPS) {
                sleep(COUNTER_INTERVAL).await;
                shown.set(value);
            }
        });
    });

    let label = format_counter(shown(), target);

    rsx! {
        div { class: "timeline-stat",
            div { class: "orbitron", "{label}{stat.suffix}" }
            div { class: "timeline-stat-label", "{stat.label}" }
        }
    }
}

use crate::components::{use_in_view, RevealOptions};
use crate::config::SiteSettings;
use crate::db::Theme;
use crate::utils::sleep;
use dioxus::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

const CHART_SIZE: f64 = 500.0;
const RADIUS: f64 = 180.0;
const LABEL_OFFSET: f64 = 20.0;
const RINGS: usize = 5;
const POINT_RADIUS: f64 = 6.0;
/// Pause between the chart scrolling into view and the values being drawn
const DRAW_DELAY: Duration = Duration::from_millis(500);
const CHART_ID: &str = "radarChart";

/// Axis angle for skill `index` of `count`, starting at the top and going clockwise.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    -FRAC_PI_2 + TAU * index as f64 / count as f64
}

pub fn point_at(angle: f64, distance: f64, center: f64) -> (f64, f64) {
    (
        center + angle.cos() * distance,
        center + angle.sin() * distance,
    )
}

/// Where a value on a 0-100 scale lands on its axis
pub fn vertex(index: usize, count: usize, value: f64, radius: f64, center: f64) -> (f64, f64) {
    let value = if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    };
    point_at(axis_angle(index, count), radius * value / 100.0, center)
}

/// SVG `points` attribute for the value polygon
pub fn polygon_points(values: &[f64], radius: f64, center: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let (x, y) = vertex(index, values.len(), *value, radius, center);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPalette {
    pub grid: &'static str,
    pub label: &'static str,
    pub stroke_from: &'static str,
    pub stroke_to: &'static str,
    pub fill: &'static str,
    pub point_stroke: &'static str,
}

impl RadarPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                grid: "rgba(37, 99, 235, 0.3)",
                label: "#1F2937",
                stroke_from: "#2563EB",
                stroke_to: "#7C3AED",
                fill: "rgba(37, 99, 235, 0.15)",
                point_stroke: "#FFFFFF",
            },
            Theme::Dark => Self {
                grid: "rgba(0, 191, 255, 0.2)",
                label: "#ffffff",
                stroke_from: "#FFD700",
                stroke_to: "#FF6B35",
                fill: "rgba(255, 215, 0, 0.2)",
                point_stroke: "#ffffff",
            },
        }
    }
}

#[component]
pub fn RadarChart() -> Element {
    let site = use_context::<SiteSettings>();
    let theme = use_context::<Signal<Theme>>();
    let palette = RadarPalette::for_theme(theme());
    let seen = use_in_view(CHART_ID.to_string(), RevealOptions::SECTION);
    let mut drawn = use_signal(|| false);

    use_effect(move || {
        if seen() && !*drawn.peek() {
            spawn(async move {
                sleep(DRAW_DELAY).await;
                drawn.set(true);
            });
        }
    });

    let center = CHART_SIZE / 2.0;
    let count = site.skills.len();
    let values: Vec<f64> = site.skills.iter().map(|skill| skill.value).collect();
    let polygon = polygon_points(&values, RADIUS, center);
    let view_box = format!("0 0 {CHART_SIZE} {CHART_SIZE}");

    rsx! {
        svg {
            id: CHART_ID,
            class: if drawn() { "radar-chart drawn" } else { "radar-chart" },
            view_box: "{view_box}",
            defs {
                linearGradient {
                    id: "radarGradient",
                    x1: "0",
                    y1: "0",
                    x2: "1",
                    y2: "1",
                    stop { offset: "0", stop_color: palette.stroke_from }
                    stop { offset: "1", stop_color: palette.stroke_to }
                }
            }
            for ring in 1..=RINGS {
                circle {
                    cx: center,
                    cy: center,
                    r: RADIUS * ring as f64 / RINGS as f64,
                    fill: "none",
                    stroke: palette.grid,
                    stroke_width: "1",
                }
            }
            for index in 0..count {
                {
                    let (x, y) = point_at(axis_angle(index, count), RADIUS, center);
                    rsx! {
                        line {
                            x1: center,
                            y1: center,
                            x2: x,
                            y2: y,
                            stroke: palette.grid,
                            stroke_width: "1",
                        }
                    }
                }
            }
            for (index, skill) in site.skills.iter().enumerate() {
                {
                    let (x, y) = point_at(axis_angle(index, count), RADIUS + LABEL_OFFSET, center);
                    rsx! {
                        text {
                            x: x,
                            y: y,
                            fill: palette.label,
                            text_anchor: "middle",
                            font_size: "13",
                            font_weight: "bold",
                            "{skill.name}"
                        }
                    }
                }
            }
            if drawn() {
                polygon {
                    points: "{polygon}",
                    fill: palette.fill,
                    stroke: "url(#radarGradient)",
                    stroke_width: "3",
                }
                for (index, value) in values.iter().enumerate() {
                    {
                        let (x, y) = vertex(index, count, *value, RADIUS, center);
                        rsx! {
                            circle {
                                cx: x,
                                cy: y,
                                r: POINT_RADIUS,
                                fill: "url(#radarGradient)",
                                stroke: palette.point_stroke,
                                stroke_width: "2",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn first_axis_points_up() {
        assert!(close(vertex(0, 6, 100.0, 180.0, 250.0), (250.0, 70.0)));
        assert!(close(vertex(0, 6, 50.0, 180.0, 250.0), (250.0, 160.0)));
    }

    #[test]
    fn axes_advance_clockwise() {
        // with four skills the second axis points right in screen coordinates
        assert!(close(vertex(1, 4, 100.0, 100.0, 0.0), (100.0, 0.0)));
        assert!(close(vertex(2, 4, 100.0, 100.0, 0.0), (0.0, 100.0)));
    }

    #[test]
    fn values_are_clamped_to_scale() {
        assert!(close(
            vertex(0, 3, 150.0, 100.0, 0.0),
            vertex(0, 3, 100.0, 100.0, 0.0)
        ));
        assert!(close(vertex(1, 3, f64::NAN, 100.0, 10.0), (10.0, 10.0)));
    }

    #[test]
    fn polygon_has_one_pair_per_value() {
        let points = polygon_points(&[90.0, 85.0, 88.0], 180.0, 250.0);
        assert_eq!(points.split(' ').count(), 3);
        assert!(points.starts_with("250.00,88.00"));
        assert_eq!(polygon_points(&[], 180.0, 250.0), "");
    }

    #[test]
    fn palette_follows_theme() {
        assert_eq!(RadarPalette::for_theme(Theme::Dark).stroke_from, "#FFD700");
        assert_eq!(RadarPalette::for_theme(Theme::Light).label, "#1F2937");
    }
}

use dioxus::prelude::*;

use crate::charts::geometry::{radar_layout, trend_layout, Plot};
use crate::charts::model::{RadarChart, TrendChart, TrendSubject, CHART_HEIGHT};
use crate::core::columns::TechDimension;
use crate::core::format::format_score;
use crate::core::theme::Palette;
use crate::t;

const TREND_PLOT: Plot = Plot::new(640.0, CHART_HEIGHT as f64, 48.0);
const RADAR_PLOT: Plot = Plot::new(480.0, CHART_HEIGHT as f64, 64.0);

pub(crate) fn dimension_label(dimension: TechDimension) -> String {
    match dimension {
        TechDimension::ArtificialIntelligence => t!("tech-ai"),
        TechDimension::BigData => t!("tech-big-data"),
        TechDimension::CloudComputing => t!("tech-cloud"),
        TechDimension::Blockchain => t!("tech-blockchain"),
    }
}

#[component]
pub fn TrendChartCard(chart: TrendChart, palette: Palette) -> Element {
    let layout = trend_layout(&chart, TREND_PLOT);
    let name = match &chart.subject {
        TrendSubject::Company { short_name, .. } => short_name.clone(),
        TrendSubject::Overall => t!("chart-trend-overall"),
    };
    let title = t!("chart-trend-title", name = name);
    let x_title = t!("chart-axis-year");
    let y_title = t!("chart-axis-score");

    let view_box = format!("0 0 {} {}", TREND_PLOT.width, TREND_PLOT.height);
    let left = TREND_PLOT.padding;
    let right = TREND_PLOT.width - TREND_PLOT.padding;
    let tick_label_x = left - 8.0;
    let x_label_y = TREND_PLOT.height - TREND_PLOT.padding + 18.0;
    let x_title_x = (left + right) / 2.0;
    let x_title_y = TREND_PLOT.height - 6.0;
    let y_title_y = TREND_PLOT.height / 2.0;
    let y_title_transform = format!("rotate(-90 12 {y_title_y})");
    let y_ticks: Vec<(String, f64, f64)> = layout
        .y_ticks
        .iter()
        .map(|tick| (tick.label.clone(), tick.position, tick.position + 4.0))
        .collect();

    rsx! {
        figure { class: "chart chart--trend",
            figcaption { class: "chart__title", "{title}" }
            svg {
                class: "chart__canvas",
                view_box: "{view_box}",
                height: "{CHART_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                for (label, position, label_y) in y_ticks.into_iter() {
                    g { key: "y-{label}",
                        line {
                            class: "chart__grid",
                            x1: "{left}",
                            x2: "{right}",
                            y1: "{position}",
                            y2: "{position}",
                        }
                        text {
                            class: "chart__tick",
                            x: "{tick_label_x}",
                            y: "{label_y}",
                            text_anchor: "end",
                            "{label}"
                        }
                    }
                }

                for tick in layout.x_ticks.iter() {
                    text {
                        key: "x-{tick.label}",
                        class: "chart__tick",
                        x: "{tick.position}",
                        y: "{x_label_y}",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }

                if !layout.polyline.is_empty() {
                    polyline {
                        class: "chart__line",
                        points: "{layout.polyline}",
                        fill: "none",
                        stroke: "{palette.primary}",
                        stroke_width: "3",
                    }
                }

                for (index, (x, y)) in layout.markers.iter().enumerate() {
                    circle {
                        key: "m-{index}",
                        class: "chart__marker",
                        cx: "{x}",
                        cy: "{y}",
                        r: "4",
                        fill: "{palette.primary}",
                    }
                }

                text {
                    class: "chart__axis-title",
                    x: "{x_title_x}",
                    y: "{x_title_y}",
                    text_anchor: "middle",
                    "{x_title}"
                }
                text {
                    class: "chart__axis-title",
                    x: "12",
                    y: "{y_title_y}",
                    text_anchor: "middle",
                    transform: "{y_title_transform}",
                    "{y_title}"
                }
            }
            if chart.points.is_empty() {
                p { class: "chart__placeholder", {t!("chart-no-data")} }
            }
        }
    }
}

#[component]
pub fn RadarChartCard(chart: RadarChart, palette: Palette) -> Element {
    let layout = radar_layout(&chart, RADAR_PLOT);
    let title = t!("chart-radar-title", name = chart.short_name.clone());
    let view_box = format!("0 0 {} {}", RADAR_PLOT.width, RADAR_PLOT.height);
    let (cx, cy) = layout.center;
    let spoke_ends: Vec<(f64, f64)> = layout.spokes.iter().map(|spoke| spoke.end).collect();

    let labels: Vec<(String, f64, f64, String)> = chart
        .axes
        .iter()
        .zip(layout.spokes.iter())
        .map(|(axis, spoke)| {
            (
                dimension_label(axis.dimension),
                spoke.label_at.0,
                spoke.label_at.1,
                format_score(axis.value),
            )
        })
        .collect();

    rsx! {
        figure { class: "chart chart--radar",
            figcaption { class: "chart__title", "{title}" }
            svg {
                class: "chart__canvas",
                view_box: "{view_box}",
                height: "{CHART_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                for (index, ring) in layout.rings.iter().enumerate() {
                    polygon {
                        key: "ring-{index}",
                        class: "chart__grid",
                        points: "{ring}",
                        fill: "none",
                    }
                }

                for (index, (x2, y2)) in spoke_ends.into_iter().enumerate() {
                    line {
                        key: "spoke-{index}",
                        class: "chart__grid",
                        x1: "{cx}",
                        y1: "{cy}",
                        x2: "{x2}",
                        y2: "{y2}",
                    }
                }

                polygon {
                    class: "chart__area",
                    points: "{layout.polygon}",
                    fill: "{palette.secondary}",
                    fill_opacity: "0.45",
                    stroke: "{palette.primary}",
                    stroke_width: "2",
                }

                for (label, x, y, value) in labels.into_iter() {
                    text {
                        key: "{label}",
                        class: "chart__tick",
                        x: "{x}",
                        y: "{y}",
                        text_anchor: "middle",
                        "{label} ({value})"
                    }
                }
            }
        }
    }
}

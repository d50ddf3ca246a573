//! Pixel layout for the SVG chart components.
//!
//! Kept free of any UI types so degenerate inputs (one point, no points,
//! an all-zero radar) can be checked in plain unit tests.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::charts::model::{RadarChart, TrendChart};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Plot {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn left(&self) -> f64 {
        self.padding
    }

    fn right(&self) -> f64 {
        self.width - self.padding
    }

    fn top(&self) -> f64 {
        self.padding
    }

    fn bottom(&self) -> f64 {
        self.height - self.padding
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendLayout {
    /// Marker centers, one per data point.
    pub markers: Vec<(f64, f64)>,
    /// SVG `points` attribute for the connecting polyline; empty below two points.
    pub polyline: String,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub y_max: f64,
}

const Y_TICKS: usize = 5;

pub fn trend_layout(chart: &TrendChart, plot: Plot) -> TrendLayout {
    let y_max = nice_ceiling(
        chart
            .points
            .iter()
            .map(|point| point.score)
            .fold(0.0, f64::max),
    );

    let (first_year, last_year) = match (chart.points.first(), chart.points.last()) {
        (Some(first), Some(last)) => (first.year, last.year),
        _ => (0, 0),
    };
    let span = f64::from(last_year - first_year);

    let x_at = |year: i32| {
        if span > 0.0 {
            plot.left() + f64::from(year - first_year) / span * (plot.right() - plot.left())
        } else {
            (plot.left() + plot.right()) / 2.0
        }
    };
    let y_at = |score: f64| plot.bottom() - score / y_max * (plot.bottom() - plot.top());

    let markers: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|point| (x_at(point.year), y_at(point.score)))
        .collect();

    let polyline = if markers.len() >= 2 {
        markers
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        String::new()
    };

    let x_ticks = chart
        .points
        .iter()
        .map(|point| Tick {
            position: x_at(point.year),
            label: point.year.to_string(),
        })
        .collect();

    let y_ticks = (0..=Y_TICKS)
        .map(|step| {
            let value = y_max * step as f64 / Y_TICKS as f64;
            Tick {
                position: y_at(value),
                label: format!("{value:.0}"),
            }
        })
        .collect();

    TrendLayout {
        markers,
        polyline,
        x_ticks,
        y_ticks,
        y_max,
    }
}

/// Smallest multiple of 10 at or above `value`, never below 10.
fn nice_ceiling(value: f64) -> f64 {
    ((value / 10.0).ceil() * 10.0).max(10.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSpoke {
    pub end: (f64, f64),
    pub label_at: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub center: (f64, f64),
    pub radius: f64,
    pub spokes: Vec<RadarSpoke>,
    /// Concentric grid rings as SVG `points` attributes.
    pub rings: Vec<String>,
    /// Value polygon as an SVG `points` attribute; collapses onto the center when every value is 0.
    pub polygon: String,
    pub vertices: Vec<(f64, f64)>,
}

const RINGS: usize = 4;

pub fn radar_layout(chart: &RadarChart, plot: Plot) -> RadarLayout {
    let center = (plot.width / 2.0, plot.height / 2.0);
    let radius = (plot.width.min(plot.height) / 2.0 - plot.padding).max(0.0);
    let count = chart.axes.len();

    // First axis points straight up, the rest follow clockwise.
    let point_at = |index: usize, distance: f64| {
        let angle = -FRAC_PI_2 + index as f64 * TAU / count as f64;
        (
            center.0 + distance * angle.cos(),
            center.1 + distance * angle.sin(),
        )
    };

    let scale = if chart.radial_max > 0.0 {
        radius / chart.radial_max
    } else {
        0.0
    };

    let spokes = (0..count)
        .map(|index| RadarSpoke {
            end: point_at(index, radius),
            label_at: point_at(index, radius + plot.padding * 0.5),
        })
        .collect();

    let rings = (1..=RINGS)
        .map(|ring| {
            let distance = radius * ring as f64 / RINGS as f64;
            svg_points((0..count).map(|index| point_at(index, distance)))
        })
        .collect();

    let vertices: Vec<(f64, f64)> = chart
        .axes
        .iter()
        .enumerate()
        .map(|(index, axis)| point_at(index, axis.value.max(0.0) * scale))
        .collect();

    RadarLayout {
        center,
        radius,
        spokes,
        rings,
        polygon: svg_points(vertices.iter().copied()),
        vertices,
    }
}

fn svg_points(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

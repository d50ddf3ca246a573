//! Chart specifications handed to the SVG components.
//!
//! These carry data only. Titles and axis names are localized by the
//! components, colors come from the palette.

use serde::Serialize;

use crate::core::columns::TechDimension;

/// Rendered height of every chart, in pixels.
pub const CHART_HEIGHT: u32 = 400;

/// What a trend line describes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendSubject {
    Company { security_code: i64, short_name: String },
    Overall,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub score: f64,
}

/// Normalized score over the years, drawn as lines with markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub subject: TrendSubject,
    /// Ascending by year; may hold a single point.
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarAxis {
    pub dimension: TechDimension,
    pub value: f64,
}

/// The four technology scores of one company-year on a filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub security_code: i64,
    pub short_name: String,
    pub year: i32,
    pub axes: [RadarAxis; 4],
    /// Upper bound of the radial axis; 0 when every value is 0.
    pub radial_max: f64,
}

//! Chart builders (pure, over the prepared table) and the SVG components that draw them.

pub mod geometry;
pub mod model;
mod radar;
mod trend;
mod view;

pub use model::{RadarAxis, RadarChart, TrendChart, TrendPoint, TrendSubject, CHART_HEIGHT};
pub use radar::radar_chart;
pub use trend::trend_chart;
pub use view::{RadarChartCard, TrendChartCard};

pub(crate) use view::dimension_label;

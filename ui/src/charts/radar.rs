use crate::charts::model::{RadarAxis, RadarChart};
use crate::core::columns::TechDimension;
use crate::core::error::ChartError;
use crate::core::table::CompanyTable;

/// Headroom above the largest value so the polygon never touches the rim.
const RADIAL_HEADROOM: f64 = 1.2;

/// Technology profile of a company's most recent year.
pub fn radar_chart(table: &CompanyTable, security_code: i64) -> Result<RadarChart, ChartError> {
    let latest = table
        .latest_record(security_code)
        .ok_or(ChartError::UnknownCompany(security_code))?;

    let axes = TechDimension::ALL.map(|dimension| RadarAxis {
        dimension,
        value: latest.tech.get(dimension),
    });
    let radial_max = latest.tech.max().max(0.0) * RADIAL_HEADROOM;

    Ok(RadarChart {
        security_code,
        short_name: latest.short_name.clone(),
        year: latest.year,
        axes,
        radial_max,
    })
}

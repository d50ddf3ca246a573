use crate::charts::model::{TrendChart, TrendPoint, TrendSubject};
use crate::core::error::ChartError;
use crate::core::table::CompanyTable;

/// Trend of the normalized score.
///
/// With a security code the series is that company's own history; without
/// one it is the mean score of all companies per year.
pub fn trend_chart(table: &CompanyTable, security_code: Option<i64>) -> Result<TrendChart, ChartError> {
    match security_code {
        Some(code) => {
            let rows = table.company_rows(code);
            let first = rows.first().ok_or(ChartError::UnknownCompany(code))?;
            Ok(TrendChart {
                subject: TrendSubject::Company {
                    security_code: code,
                    short_name: first.short_name.clone(),
                },
                points: rows
                    .iter()
                    .map(|record| TrendPoint {
                        year: record.year,
                        score: record.normalized_score,
                    })
                    .collect(),
            })
        }
        None => Ok(TrendChart {
            subject: TrendSubject::Overall,
            points: table
                .yearly_mean_scores()
                .into_iter()
                .map(|(year, score)| TrendPoint { year, score })
                .collect(),
        }),
    }
}

//! The prepared, read-only company-year table and the queries the views run against it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::columns::TechDimension;

/// The four technology-adoption scores of one company-year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TechScores {
    pub artificial_intelligence: f64,
    pub big_data: f64,
    pub cloud_computing: f64,
    pub blockchain: f64,
}

impl TechScores {
    pub fn get(&self, dimension: TechDimension) -> f64 {
        match dimension {
            TechDimension::ArtificialIntelligence => self.artificial_intelligence,
            TechDimension::BigData => self.big_data,
            TechDimension::CloudComputing => self.cloud_computing,
            TechDimension::Blockchain => self.blockchain,
        }
    }

    pub fn set(&mut self, dimension: TechDimension, value: f64) {
        match dimension {
            TechDimension::ArtificialIntelligence => self.artificial_intelligence = value,
            TechDimension::BigData => self.big_data = value,
            TechDimension::CloudComputing => self.cloud_computing = value,
            TechDimension::Blockchain => self.blockchain = value,
        }
    }

    pub fn total(&self) -> f64 {
        TechDimension::ALL.iter().map(|dim| self.get(*dim)).sum()
    }

    pub fn max(&self) -> f64 {
        TechDimension::ALL
            .iter()
            .map(|dim| self.get(*dim))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// One row of the prepared table, keyed by `(security_code, year)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyYearRecord {
    pub security_code: i64,
    pub short_name: String,
    pub year: i32,
    pub industry: String,
    pub province: String,
    pub tech: TechScores,
    /// Raw transformation intensity, 0 when missing or non-numeric.
    pub intensity: f64,
    /// Sum of the four technology scores.
    pub tech_total: f64,
    /// Intensity relative to the table-wide maximum, scaled to 0..=100 and rounded to 2 places.
    pub normalized_score: f64,
}

impl CompanyYearRecord {
    pub fn key(&self) -> (i64, i32) {
        (self.security_code, self.year)
    }
}

/// A company as offered by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyEntry {
    pub security_code: i64,
    pub short_name: String,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewSummary {
    pub companies: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub rows: usize,
}

/// Records sorted by `(security_code, year)` with no repeated key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyTable {
    records: Vec<CompanyYearRecord>,
}

impl CompanyTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Callers must pass records already sorted by key; the loader does.
    pub(crate) fn from_sorted(records: Vec<CompanyYearRecord>) -> Self {
        debug_assert!(records.windows(2).all(|pair| pair[0].key() < pair[1].key()));
        Self { records }
    }

    pub fn records(&self) -> &[CompanyYearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows of one company in ascending year order; empty if the code is unknown.
    pub fn company_rows(&self, security_code: i64) -> &[CompanyYearRecord] {
        let start = self
            .records
            .partition_point(|record| record.security_code < security_code);
        let end = self
            .records
            .partition_point(|record| record.security_code <= security_code);
        &self.records[start..end]
    }

    pub fn contains_company(&self, security_code: i64) -> bool {
        !self.company_rows(security_code).is_empty()
    }

    /// Most recent row of a company (the last one after the ascending sort).
    pub fn latest_record(&self, security_code: i64) -> Option<&CompanyYearRecord> {
        self.company_rows(security_code).last()
    }

    /// Distinct companies in ascending code order, named after their earliest row.
    pub fn companies(&self) -> Vec<CompanyEntry> {
        let mut entries: Vec<CompanyEntry> = Vec::new();
        for record in &self.records {
            if entries
                .last()
                .is_some_and(|entry| entry.security_code == record.security_code)
            {
                continue;
            }
            entries.push(CompanyEntry {
                security_code: record.security_code,
                short_name: record.short_name.clone(),
            });
        }
        entries
    }

    pub fn company_count(&self) -> usize {
        let mut count = 0;
        let mut previous = None;
        for record in &self.records {
            if previous != Some(record.security_code) {
                count += 1;
                previous = Some(record.security_code);
            }
        }
        count
    }

    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.records.iter().map(|record| record.year).min()?;
        let last = self.records.iter().map(|record| record.year).max()?;
        Some((first, last))
    }

    /// Mean normalized score per year across all companies, ascending by year.
    pub fn yearly_mean_scores(&self) -> Vec<(i32, f64)> {
        let mut buckets: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for record in &self.records {
            let bucket = buckets.entry(record.year).or_insert((0.0, 0));
            bucket.0 += record.normalized_score;
            bucket.1 += 1;
        }
        buckets
            .into_iter()
            .map(|(year, (sum, count))| (year, sum / count as f64))
            .collect()
    }

    pub fn summary(&self) -> Option<OverviewSummary> {
        let (first_year, last_year) = self.year_range()?;
        Some(OverviewSummary {
            companies: self.company_count(),
            first_year,
            last_year,
            rows: self.len(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(code: i64, name: &str, year: i32, score: f64) -> CompanyYearRecord {
        CompanyYearRecord {
            security_code: code,
            short_name: name.to_string(),
            year,
            industry: "制造业".to_string(),
            province: "广东省".to_string(),
            tech: TechScores::default(),
            intensity: score,
            tech_total: 0.0,
            normalized_score: score,
        }
    }

    fn sample() -> CompanyTable {
        CompanyTable::from_sorted(vec![
            record(1, "平安银行", 2018, 20.0),
            record(1, "平安银行", 2019, 40.0),
            record(2, "万科A", 2019, 60.0),
            record(5, "ST星源", 2011, 10.0),
        ])
    }

    #[test]
    fn company_rows_are_contiguous_and_year_ordered() {
        let table = sample();
        let rows = table.company_rows(1);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2018);
        assert_eq!(rows[1].year, 2019);
        assert!(table.company_rows(3).is_empty());
        assert_eq!(table.latest_record(1).map(|r| r.year), Some(2019));
    }

    #[test]
    fn companies_are_distinct_and_ascending() {
        let codes: Vec<i64> = sample()
            .companies()
            .into_iter()
            .map(|entry| entry.security_code)
            .collect();
        assert_eq!(codes, vec![1, 2, 5]);
    }

    #[test]
    fn yearly_means_group_across_companies() {
        let means = sample().yearly_mean_scores();
        assert_eq!(means, vec![(2011, 10.0), (2018, 20.0), (2019, 50.0)]);
    }

    #[test]
    fn summary_reports_counts_and_span() {
        let summary = sample().summary().unwrap();
        assert_eq!(summary.companies, 3);
        assert_eq!((summary.first_year, summary.last_year), (2011, 2019));
        assert_eq!(summary.rows, 4);
        assert!(CompanyTable::empty().summary().is_none());
    }

    #[test]
    fn tech_scores_total_and_max() {
        let mut tech = TechScores::default();
        tech.set(TechDimension::BigData, 2.0);
        tech.set(TechDimension::Blockchain, 5.0);
        assert_eq!(tech.total(), 7.0);
        assert_eq!(tech.max(), 5.0);
    }
}

//! Workbook → [`CompanyTable`] preparation.
//!
//! Steps, in order:
//! 1. refuse a missing file,
//! 2. check every required header is present (report all missing ones at once),
//! 3. drop rows without a security code, short name or parsable year,
//! 4. coerce the four technology scores and the intensity to numbers (0 when unusable),
//! 5. derive the technology total and the normalized 0–100 score,
//! 6. sort by `(security_code, year)`, keeping the last row of a repeated key.

use std::path::Path;

use crate::core::columns::{self, TechDimension, REQUIRED_COLUMNS};
use crate::core::error::LoadError;
use crate::core::format::round_to;
use crate::core::source::{Cell, RawTable, TableSource, XlsxSource};
use crate::core::table::{CompanyTable, CompanyYearRecord, TechScores};

/// Load the workbook at `path` with the default `.xlsx` reader.
pub fn load_table(path: &Path) -> Result<CompanyTable, LoadError> {
    load_table_with(&XlsxSource, path)
}

pub fn load_table_with<S>(source: &S, path: &Path) -> Result<CompanyTable, LoadError>
where
    S: TableSource + ?Sized,
{
    if !path.exists() {
        tracing::warn!(path = %path.display(), "data file missing");
        return Err(LoadError::MissingFile(path.to_path_buf()));
    }

    tracing::info!(path = %path.display(), "loading company table");
    let raw = source.read_table(path)?;
    let table = prepare_table(raw)?;
    tracing::info!(
        rows = table.len(),
        companies = table.company_count(),
        "company table ready"
    );
    Ok(table)
}

/// Validate and derive; pure over an already-read [`RawTable`].
pub fn prepare_table(raw: RawTable) -> Result<CompanyTable, LoadError> {
    let columns = ColumnIndex::resolve(&raw)?;

    let total_rows = raw.rows.len();
    let mut records: Vec<CompanyYearRecord> = raw
        .rows
        .iter()
        .filter_map(|row| columns.record(row))
        .collect();

    let dropped = total_rows - records.len();
    if dropped > 0 {
        tracing::debug!(dropped, "dropped rows without code, name or year");
    }

    // Stable: among repeated keys the file order survives, so the last one can win below.
    records.sort_by_key(CompanyYearRecord::key);
    let records = dedup_keep_last(records);

    let max_intensity = records
        .iter()
        .map(|record| record.intensity)
        .fold(f64::NEG_INFINITY, f64::max);
    let records = records
        .into_iter()
        .map(|mut record| {
            record.normalized_score = normalized_score(record.intensity, max_intensity);
            record
        })
        .collect();

    Ok(CompanyTable::from_sorted(records))
}

/// `intensity / max * 100` rounded to 2 places, or 0 when the maximum is not positive.
pub fn normalized_score(intensity: f64, max_intensity: f64) -> f64 {
    if max_intensity > 0.0 {
        round_to(intensity / max_intensity * 100.0, 2)
    } else {
        0.0
    }
}

fn dedup_keep_last(records: Vec<CompanyYearRecord>) -> Vec<CompanyYearRecord> {
    let before = records.len();
    let mut unique: Vec<CompanyYearRecord> = Vec::with_capacity(before);
    for record in records {
        match unique.last_mut() {
            Some(last) if last.key() == record.key() => *last = record,
            _ => unique.push(record),
        }
    }
    let repeated = before - unique.len();
    if repeated > 0 {
        tracing::warn!(repeated, "repeated (code, year) rows; kept the last occurrence");
    }
    unique
}

struct ColumnIndex {
    security_code: usize,
    short_name: usize,
    year: usize,
    industry: usize,
    province: usize,
    tech: [(TechDimension, usize); 4],
    intensity: usize,
}

impl ColumnIndex {
    fn resolve(raw: &RawTable) -> Result<Self, LoadError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| raw.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            tracing::warn!(?missing, "workbook is missing required columns");
            return Err(LoadError::MissingColumns(missing));
        }

        // Presence was checked above.
        let index = |name: &str| raw.column_index(name).unwrap_or_default();
        Ok(Self {
            security_code: index(columns::SECURITY_CODE),
            short_name: index(columns::SHORT_NAME),
            year: index(columns::YEAR),
            industry: index(columns::INDUSTRY),
            province: index(columns::PROVINCE),
            tech: TechDimension::ALL.map(|dim| (dim, index(dim.column()))),
            intensity: index(columns::TRANSFORMATION_INTENSITY),
        })
    }

    fn record(&self, row: &[Cell]) -> Option<CompanyYearRecord> {
        let security_code = cell(row, self.security_code).as_integer()?;
        let short_name = cell(row, self.short_name).as_text()?;
        let year = calendar_year(cell(row, self.year))?;

        let mut tech = TechScores::default();
        for (dimension, column) in self.tech {
            tech.set(dimension, numeric_or_zero(cell(row, column)));
        }

        Some(CompanyYearRecord {
            security_code,
            short_name,
            year,
            industry: cell(row, self.industry).as_text().unwrap_or_default(),
            province: cell(row, self.province).as_text().unwrap_or_default(),
            tech_total: tech.total(),
            tech,
            intensity: numeric_or_zero(cell(row, self.intensity)),
            normalized_score: 0.0,
        })
    }
}

static EMPTY: Cell = Cell::Empty;

/// Years outside this range are treated as unparsable.
const PLAUSIBLE_YEARS: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Only numbers and numeric text count; booleans and date serials do not.
fn calendar_year(cell: &Cell) -> Option<i32> {
    let value = match cell {
        Cell::Number(_) | Cell::Text(_) => cell.as_f64()?.trunc(),
        Cell::Empty | Cell::Bool(_) => return None,
    };
    // `as` saturates, so huge values land outside the range too.
    let year = value as i32;
    PLAUSIBLE_YEARS.contains(&year).then_some(year)
}

fn cell(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&EMPTY)
}

fn numeric_or_zero(cell: &Cell) -> f64 {
    cell.as_f64().unwrap_or(0.0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell as Counter;

    pub(crate) fn header() -> RawTable {
        RawTable::new(REQUIRED_COLUMNS)
    }

    pub(crate) fn row(code: i64, name: &str, year: i32, tech: [f64; 4], intensity: f64) -> Vec<Cell> {
        vec![
            Cell::Number(code as f64),
            Cell::Text(name.into()),
            Cell::Number(year as f64),
            Cell::Text("信息技术".into()),
            Cell::Text("北京市".into()),
            Cell::Number(tech[0]),
            Cell::Number(tech[1]),
            Cell::Number(tech[2]),
            Cell::Number(tech[3]),
            Cell::Number(intensity),
        ]
    }

    /// The two-row table used throughout the scenario tests.
    pub(crate) fn scenario_table() -> CompanyTable {
        let mut raw = header();
        raw.push_row(row(1, "A", 2020, [0.0, 0.0, 0.0, 0.0], 100.0));
        raw.push_row(row(1, "A", 2019, [1.0, 2.0, 3.0, 4.0], 50.0));
        prepare_table(raw).unwrap()
    }

    #[test]
    fn scenario_totals_and_normalized_scores() {
        let table = scenario_table();
        let records = table.records();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].year, records[0].tech_total, records[0].normalized_score), (2019, 10.0, 50.0));
        assert_eq!((records[1].year, records[1].tech_total, records[1].normalized_score), (2020, 0.0, 100.0));
    }

    #[test]
    fn rows_without_key_components_are_dropped() {
        let mut raw = header();
        raw.push_row(row(1, "A", 2019, [0.0; 4], 1.0));

        let mut no_code = row(2, "B", 2019, [0.0; 4], 1.0);
        no_code[0] = Cell::Empty;
        raw.push_row(no_code);

        let mut no_name = row(3, "C", 2019, [0.0; 4], 1.0);
        no_name[1] = Cell::Text("  ".into());
        raw.push_row(no_name);

        let mut bad_year = row(4, "D", 2019, [0.0; 4], 1.0);
        bad_year[2] = Cell::Text("unknown".into());
        raw.push_row(bad_year);

        // Short row: year column absent entirely.
        raw.push_row(vec![Cell::Number(5.0), Cell::Text("E".into())]);

        let table = prepare_table(raw).unwrap();
        let codes: Vec<i64> = table.records().iter().map(|r| r.security_code).collect();
        assert_eq!(codes, vec![1]);
    }

    #[test]
    fn unusable_scores_become_zero() {
        let mut raw = header();
        let mut messy = row(7, "G", 2015, [1.0, 1.0, 1.0, 1.0], 8.0);
        messy[5] = Cell::Text("--".into());
        messy[6] = Cell::Empty;
        messy[9] = Cell::Text("n/a".into());
        raw.push_row(messy);
        raw.push_row(row(8, "H", 2015, [0.0; 4], 4.0));

        let table = prepare_table(raw).unwrap();
        let messy = &table.company_rows(7)[0];
        assert_eq!(messy.tech.artificial_intelligence, 0.0);
        assert_eq!(messy.tech.big_data, 0.0);
        assert_eq!(messy.tech_total, 2.0);
        assert_eq!(messy.intensity, 0.0);
        assert_eq!(messy.normalized_score, 0.0);
        assert_eq!(table.company_rows(8)[0].normalized_score, 100.0);
    }

    #[test]
    fn zero_max_intensity_yields_zero_scores() {
        let mut raw = header();
        raw.push_row(row(1, "A", 2010, [1.0; 4], 0.0));
        raw.push_row(row(2, "B", 2011, [2.0; 4], 0.0));
        let table = prepare_table(raw).unwrap();
        assert!(table.records().iter().all(|r| r.normalized_score == 0.0));
    }

    #[test]
    fn normalized_scores_stay_within_bounds() {
        let mut raw = header();
        for (i, intensity) in [0.0, 3.7, 12.0, 99.99, 250.0].into_iter().enumerate() {
            raw.push_row(row(i as i64, "X", 2010, [0.0; 4], intensity));
        }
        let table = prepare_table(raw).unwrap();
        assert!(table
            .records()
            .iter()
            .all(|r| (0.0..=100.0).contains(&r.normalized_score)));
        assert_eq!(table.company_rows(2)[0].normalized_score, 4.8);
    }

    #[test]
    fn output_is_sorted_and_resorting_is_a_no_op() {
        let mut raw = header();
        raw.push_row(row(3, "C", 2012, [0.0; 4], 1.0));
        raw.push_row(row(1, "A", 2014, [0.0; 4], 1.0));
        raw.push_row(row(1, "A", 2009, [0.0; 4], 1.0));
        raw.push_row(row(2, "B", 2020, [0.0; 4], 1.0));

        let table = prepare_table(raw).unwrap();
        let keys: Vec<(i64, i32)> = table.records().iter().map(|r| r.key()).collect();
        let mut resorted = keys.clone();
        resorted.sort();
        assert_eq!(keys, resorted);
        assert_eq!(keys, vec![(1, 2009), (1, 2014), (2, 2020), (3, 2012)]);
    }

    #[test]
    fn repeated_keys_keep_the_last_occurrence() {
        let mut raw = header();
        raw.push_row(row(1, "A", 2019, [1.0; 4], 10.0));
        raw.push_row(row(1, "A-new", 2019, [2.0; 4], 20.0));

        let table = prepare_table(raw).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].short_name, "A-new");
        assert_eq!(table.records()[0].tech_total, 8.0);
    }

    #[test]
    fn boolean_and_date_serial_years_are_dropped() {
        let mut raw = header();
        raw.push_row(row(1, "A", 2019, [0.0; 4], 1.0));

        let mut boolean = row(2, "B", 0, [0.0; 4], 1.0);
        boolean[2] = Cell::Bool(true);
        raw.push_row(boolean);

        // 2019-01-01 as an Excel serial number.
        let mut serial = row(3, "C", 0, [0.0; 4], 1.0);
        serial[2] = Cell::Number(43466.0);
        raw.push_row(serial);

        let table = prepare_table(raw).unwrap();
        let codes: Vec<i64> = table.records().iter().map(|r| r.security_code).collect();
        assert_eq!(codes, vec![1]);
    }

    #[test]
    fn fractional_years_truncate() {
        let mut raw = header();
        let mut fractional = row(1, "A", 0, [0.0; 4], 1.0);
        fractional[2] = Cell::Text("2016.0".into());
        raw.push_row(fractional);
        let table = prepare_table(raw).unwrap();
        assert_eq!(table.records()[0].year, 2016);
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let mut raw = RawTable::new([
            columns::SECURITY_CODE,
            columns::SHORT_NAME,
            columns::INDUSTRY,
            columns::PROVINCE,
            columns::ARTIFICIAL_INTELLIGENCE,
            columns::BIG_DATA,
            columns::CLOUD_COMPUTING,
            columns::BLOCKCHAIN,
        ]);
        raw.push_row(vec![Cell::Number(1.0)]);

        match prepare_table(raw) {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing, vec![columns::YEAR, columns::TRANSFORMATION_INTENSITY]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_reported_without_reading() {
        struct NeverCalled(Counter<usize>);
        impl TableSource for NeverCalled {
            fn read_table(&self, _path: &Path) -> Result<RawTable, LoadError> {
                self.0.set(self.0.get() + 1);
                Ok(RawTable::default())
            }
        }

        let source = NeverCalled(Counter::new(0));
        let result = load_table_with(&source, Path::new("/definitely/not/here.xlsx"));
        assert!(matches!(result, Err(LoadError::MissingFile(_))));
        assert_eq!(source.0.get(), 0);
    }
}

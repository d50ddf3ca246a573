use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::{radar_chart, trend_chart, RadarChartCard, TrendChartCard};
use crate::core::cache::DataCache;
use crate::core::columns::TechDimension;
use crate::core::config::DashboardConfig;
use crate::core::format::{company_label, format_score};
use crate::core::session::SessionContext;
use crate::core::table::CompanyTable;
use crate::t;
use crate::views::LoadNotice;

/// One row of the yearly history table, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistoryRow {
    pub year: i32,
    pub score: String,
    pub tech_total: String,
    pub tech: [String; 4],
}

pub(crate) fn history_rows(table: &CompanyTable, security_code: i64) -> Vec<HistoryRow> {
    table
        .company_rows(security_code)
        .iter()
        .map(|record| HistoryRow {
            year: record.year,
            score: format_score(record.normalized_score),
            tech_total: format_score(record.tech_total),
            tech: TechDimension::ALL.map(|dimension| format_score(record.tech.get(dimension))),
        })
        .collect()
}

#[component]
pub fn CompanyAnalysis() -> Element {
    let config = use_context::<DashboardConfig>();
    let cache = use_context::<Rc<DataCache>>();
    let mut session = use_context::<Signal<SessionContext>>();
    let dataset = cache.get_or_load(&config.data_path);
    let table = &dataset.table;
    let palette = config.palette;

    let load_notice = dataset
        .error
        .as_ref()
        .map(crate::views::describe_load_error);

    let Some(code) = session.read().active_company(table) else {
        return rsx! {
            section { class: "page page-company",
                h2 { {t!("company-heading")} }
                if let Some(message) = load_notice {
                    LoadNotice { message }
                }
                p { class: "page__empty", {t!("company-empty")} }
            }
        };
    };

    let options: Vec<(String, String)> = table
        .companies()
        .into_iter()
        .map(|entry| {
            (
                entry.security_code.to_string(),
                company_label(entry.security_code, &entry.short_name),
            )
        })
        .collect();

    let trend = trend_chart(table, Some(code))?;
    let radar = radar_chart(table, code)?;
    let rows = history_rows(table, code);
    let heading = table
        .latest_record(code)
        .map(|latest| {
            (
                format!("{} ({})", latest.short_name, latest.security_code),
                latest.industry.clone(),
                latest.province.clone(),
            )
        })
        .unwrap_or_default();
    let (title, industry, province) = heading;
    let selected = code.to_string();
    let tech_headers = TechDimension::ALL.map(crate::charts::dimension_label);

    let random_cache = Rc::clone(&cache);
    let random_path = config.data_path.clone();
    let on_random = move |_| {
        let dataset = random_cache.get_or_load(&random_path);
        let picked = session
            .write()
            .pick_random(&dataset.table, &mut rand::thread_rng());
        if let Some(code) = picked {
            tracing::debug!(security_code = code, "random company picked");
        }
    };

    let on_select = move |evt: FormEvent| match evt.value().parse::<i64>() {
        Ok(code) => session.write().select(code),
        Err(err) => tracing::warn!(value = %evt.value(), %err, "ignoring unparsable company code"),
    };

    rsx! {
        section { class: "page page-company",
            h2 { {t!("company-heading")} }

            if let Some(message) = load_notice {
                LoadNotice { message }
            }

            div { class: "company-picker",
                label { r#for: "company-select", {t!("company-picker-label")} }
                select {
                    id: "company-select",
                    class: "company-picker__select",
                    value: "{selected}",
                    onchange: on_select,
                    for (value, label) in options.into_iter() {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: value == selected,
                            "{label}"
                        }
                    }
                }
                button {
                    class: "button button--ghost",
                    onclick: on_random,
                    {t!("company-random")}
                }
            }

            header { class: "company-header",
                h3 { class: "company-header__title", "{title}" }
                p { class: "company-header__meta", "{industry} · {province}" }
            }

            div { class: "company-charts",
                TrendChartCard { chart: trend, palette }
                RadarChartCard { chart: radar, palette }
            }

            section { class: "card history",
                h3 { {t!("company-history-heading")} }
                table { class: "history__table",
                    thead {
                        tr {
                            th { {t!("col-year")} }
                            th { {t!("col-score")} }
                            th { {t!("col-tech-total")} }
                            for label in tech_headers.iter() {
                                th { key: "{label}", "{label}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr { key: "{row.year}",
                                td { "{row.year}" }
                                td { "{row.score}" }
                                td { "{row.tech_total}" }
                                for (index, value) in row.tech.iter().enumerate() {
                                    td { key: "{index}", "{value}" }
                                }
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
    use crate::core::loader::tests::scenario_table;

    #[test]
    fn history_rows_are_chronological_and_two_decimal() {
        let table = scenario_table();
        let code = table.records()[0].security_code;
        let rows = history_rows(&table, code);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].year < rows[1].year);
        for row in &rows {
            for cell in std::iter::once(&row.score)
                .chain(std::iter::once(&row.tech_total))
                .chain(row.tech.iter())
            {
                let decimals = cell.split('.').nth(1).map(str::len);
                assert_eq!(decimals, Some(2), "{cell}");
            }
        }
    }

    #[test]
    fn unknown_company_has_no_history() {
        assert!(history_rows(&scenario_table(), -1).is_empty());
    }
}

use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::{trend_chart, TrendChart, TrendChartCard};
use crate::core::cache::DataCache;
use crate::core::config::DashboardConfig;
use crate::core::error::ChartError;
use crate::core::table::{CompanyTable, OverviewSummary};
use crate::views::LoadNotice;

/// Summary numbers plus the aggregate trend; `None` for an empty table.
pub(crate) fn overview(table: &CompanyTable) -> Result<Option<(OverviewSummary, TrendChart)>, ChartError> {
    let Some(summary) = table.summary() else {
        return Ok(None);
    };
    Ok(Some((summary, trend_chart(table, None)?)))
}

#[component]
pub fn Home() -> Element {
    let config = use_context::<DashboardConfig>();
    let cache = use_context::<Rc<DataCache>>();
    let dataset = cache.get_or_load(&config.data_path);
    let overview = overview(&dataset.table)?;
    let palette = config.palette;

    let hero_style = format!(
        "background: linear-gradient(135deg, {}, {});",
        palette.primary, palette.secondary
    );

    rsx! {
        section { class: "page page-home",
            div { class: "hero", style: "{hero_style}",
                h1 { {crate::t!("app-title")} }
                p { {crate::t!("home-tagline")} }
            }

            if let Some(error) = dataset.error.as_ref() {
                LoadNotice { message: crate::views::describe_load_error(error) }
            }

            if let Some((summary, chart)) = overview {
                section { class: "card overview",
                    h3 { {crate::t!("overview-heading")} }
                    dl { class: "overview__stats",
                        div { class: "overview__stat",
                            dt { {crate::t!("overview-companies")} }
                            dd { "{summary.companies}" }
                        }
                        div { class: "overview__stat",
                            dt { {crate::t!("overview-years")} }
                            dd { "{summary.first_year} - {summary.last_year}" }
                        }
                        div { class: "overview__stat",
                            dt { {crate::t!("overview-rows")} }
                            dd { "{summary.rows}" }
                        }
                    }
                }
                TrendChartCard { chart, palette }
            }
        }
    }
}

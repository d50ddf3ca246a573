mod company;
mod home;

pub use company::CompanyAnalysis;
pub use home::Home;

use dioxus::prelude::*;

use crate::core::error::LoadError;
use crate::t;

/// Localized, user-facing text for a load failure.
pub fn describe_load_error(error: &LoadError) -> String {
    match error {
        LoadError::MissingFile(path) => {
            t!("load-error-missing-file", path = path.display().to_string())
        }
        LoadError::MissingColumns(columns) => {
            t!("load-error-missing-columns", columns = columns.join(", "))
        }
        LoadError::Workbook(source) => t!("load-error-workbook", detail = source.to_string()),
        LoadError::NoWorksheet => t!("load-error-no-worksheet"),
    }
}

#[component]
pub(crate) fn LoadNotice(message: String) -> Element {
    rsx! {
        div { class: "notice notice--error", role: "alert",
            span { class: "notice__icon", aria_hidden: "true", "!" }
            p { class: "notice__message", "{message}" }
        }
    }
}

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::AppSidebar;
use crate::core::cache::DataCache;
use crate::core::config::DashboardConfig;
use crate::core::session::{Page, SessionContext};
use crate::i18n;
use crate::t;
use crate::views::{CompanyAnalysis, Home};

/// Root of the dashboard: provides the shared contexts and switches between pages.
///
/// Platform crates render this inside their own window and stylesheet setup.
#[component]
pub fn Dashboard(config: DashboardConfig) -> Element {
    i18n::init();

    let ttl = config.cache_ttl;
    let palette_css = config.palette.css_variables();
    use_context_provider(|| config.clone());
    use_context_provider(|| Rc::new(DataCache::new(ttl)));
    let session = use_context_provider(|| Signal::new(SessionContext::default()));
    // Shared with the locale switcher; keying the page on it remounts every view.
    let lang_code = use_context_provider(|| Signal::new(i18n::current_language()));

    use_hook(|| {
        tracing::info!(
            path = %config.data_path.display(),
            ttl_secs = ttl.as_secs(),
            "dashboard started"
        );
    });

    let page = session.read().page;

    rsx! {
        document::Style { "{palette_css}" }
        div { class: "layout",
            AppSidebar {}
            main {
                key: "{lang_code}",
                class: "layout__main",
                ErrorBoundary {
                    handle_error: |errors: ErrorContext| rsx! {
                        div { class: "notice notice--error", role: "alert",
                            h3 { {t!("run-failed")} }
                            p { {t!("run-failed-detail")} }
                            pre { class: "notice__detail", "{errors:?}" }
                        }
                    },
                    {match page {
                        Page::Home => rsx! { Home {} },
                        Page::CompanyAnalysis => rsx! { CompanyAnalysis {} },
                    }}
                }
            }
        }
    }
}

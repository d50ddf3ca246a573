use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::cache::DataCache;
use crate::core::config::DashboardConfig;
use crate::core::session::{Page, SessionContext};
use crate::i18n;
use crate::t;

fn page_label(page: Page) -> String {
    match page {
        Page::Home => t!("nav-home"),
        Page::CompanyAnalysis => t!("nav-company"),
    }
}

/// Sidebar with page navigation, the random-company shortcut and the locale switcher.
///
/// The random shortcut pre-selects a company and jumps to the analysis page,
/// so it works from either page.
#[component]
pub fn AppSidebar() -> Element {
    let config = use_context::<DashboardConfig>();
    let cache = use_context::<Rc<DataCache>>();
    let mut session = use_context::<Signal<SessionContext>>();
    let lang_code = try_use_context::<Signal<String>>();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let current_lang = lang_code.map(|code| code()).unwrap_or_default();
    let current_page = session.read().page;

    let on_random = move |_| {
        let dataset = cache.get_or_load(&config.data_path);
        let mut state = session.write();
        if state.pick_random(&dataset.table, &mut rand::thread_rng()).is_some() {
            state.navigate(Page::CompanyAnalysis);
        }
    };

    let on_locale = move |evt: FormEvent| {
        let value = evt.value();
        match i18n::set_language(&value) {
            Ok(()) => {
                if let Some(mut code) = lang_code {
                    code.set(value);
                }
            }
            Err(err) => tracing::warn!(%value, %err, "failed switching language"),
        }
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                span { class: "sidebar__brand-mark", aria_hidden: "true" }
                span { class: "sidebar__brand-name", {t!("brand-name")} }
            }

            h2 { class: "sidebar__heading", {t!("nav-heading")} }
            nav { class: "sidebar__nav",
                for page in Page::ALL {
                    button {
                        key: "{page:?}",
                        class: if page == current_page { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                        onclick: move |_| session.write().navigate(page),
                        {page_label(page)}
                    }
                }
            }

            button {
                class: "button button--primary sidebar__random",
                onclick: on_random,
                {t!("nav-random")}
            }

            if show_switcher {
                div { class: "sidebar__locale",
                    label { r#for: "locale-select", {t!("nav-language-label")} }
                    select {
                        id: "locale-select",
                        value: "{current_lang}",
                        oninput: on_locale,
                        for code in langs().into_iter() {
                            option {
                                key: "{code}",
                                value: "{code}",
                                selected: code == current_lang,
                                "{code}"
                            }
                        }
                    }
                }
            }
        }
    }
}

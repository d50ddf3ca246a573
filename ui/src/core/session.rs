//! Per-window session state: which page is showing and which company is picked.
//!
//! Held in a `Signal<SessionContext>` provided by the app shell, so every
//! view reads and writes the same explicit structure.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::table::CompanyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    CompanyAnalysis,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::CompanyAnalysis];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub page: Page,
    /// Company chosen in the picker (or by the random shortcut).
    pub selected_code: Option<i64>,
    /// The last company drawn by the random shortcut.
    pub random_pick: Option<i64>,
}

impl SessionContext {
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn select(&mut self, security_code: i64) {
        self.selected_code = Some(security_code);
    }

    /// Draw a random company and pre-select it. `None` when the table is empty.
    pub fn pick_random<R: Rng + ?Sized>(&mut self, table: &CompanyTable, rng: &mut R) -> Option<i64> {
        let companies = table.companies();
        let code = companies.choose(rng)?.security_code;
        self.random_pick = Some(code);
        self.selected_code = Some(code);
        Some(code)
    }

    /// The company the detail page should show: the selection if it still exists, else the first one.
    pub fn active_company(&self, table: &CompanyTable) -> Option<i64> {
        self.selected_code
            .filter(|code| table.contains_company(*code))
            .or_else(|| table.records().first().map(|record| record.security_code))
    }
}

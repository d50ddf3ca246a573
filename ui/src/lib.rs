//! Shared UI crate for the digital-transformation dashboard: data loading,
//! chart models and the Dioxus views. Platform crates only provide the window.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

mod app;
pub use app::Dashboard;

pub mod components {
    pub mod app_sidebar;
    pub use app_sidebar::AppSidebar;
}

pub use crate::core::config::DashboardConfig;

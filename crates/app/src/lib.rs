//! `ideaboard-app` — composition of the idea registry and the session store.
//!
//! Stands in for the presentation layer: it validates form input before
//! calling the stores and assembles the dashboard view.

pub mod app;
pub mod config;
pub mod dashboard;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use dashboard::{Dashboard, StatusSlice};

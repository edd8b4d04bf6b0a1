//! Utility modules

pub mod browser;
pub mod format;

pub use browser::{confirm, sleep_ms};
pub use format::{days_ago, format_date, format_datetime, format_rupees, time_ago};

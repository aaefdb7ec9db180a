// Roster Report - Core Library
// Exposes the loader, roster operations and report script for the CLI and tests

pub mod config;
pub mod employee;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod roster;

// Re-export commonly used types
pub use config::ReportConfig;
pub use employee::{Employee, DATE_FORMAT};
pub use error::{Result, RosterError};
pub use loader::{load_roster, read_roster};
pub use pipeline::{run_script, OldestEmployee, RosterReport, TitleSection};
pub use report::{format_employee, format_money, render_json, render_text};
pub use roster::{Roster, TitleGroup};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Global CO₂ emissions and GDP dashboard.
//!
//! Startup reads the merged CSV once, drops incomplete rows, picks the top
//! emitters of the latest year and renders three charts into one HTML page,
//! which the server then hands out unchanged for every request.

pub mod aggregate;
pub mod charts;
pub mod clean;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod load_clean;
pub mod models;
pub mod page;
pub mod render;
pub mod server;
pub mod theme;

pub use aggregate::{latest_year, top_emitters, TopEmitters, TOP_EMITTER_LIMIT};
pub use clean::{clean_records, Dataset};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::DashboardError;
pub use load_clean::load_records;
pub use models::{RawRecord, Record};
pub use server::DashboardServer;

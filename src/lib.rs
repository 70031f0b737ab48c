//! Helpers shared by the Clementine dashboard pages: JSON data access against
//! the backend, failure reporting, timestamp formatting and chart options.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod models;
pub mod utils;

pub use api::{DataClient, FetchError};
pub use config::{AppConfig, ConfigError};
pub use diagnostics::{ErrorReporter, MemoryReporter, TracingReporter};
pub use models::{ChartConfig, CHART_CONFIG};
pub use utils::{format_date, format_time, Timestamp};

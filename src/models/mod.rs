pub mod chart;

pub use chart::{ChartConfig, CHART_CONFIG};

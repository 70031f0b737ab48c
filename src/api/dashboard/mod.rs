pub mod client;
pub mod models;

pub use client::DataClient;
pub use models::{DailyData, FetchError, MoodData, TimeData};

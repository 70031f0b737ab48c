pub mod dashboard;

pub use dashboard::{DataClient, FetchError};

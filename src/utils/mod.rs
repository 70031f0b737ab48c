pub mod time_format;

pub use time_format::{format_date, format_date_in, format_time, format_time_in, Timestamp};

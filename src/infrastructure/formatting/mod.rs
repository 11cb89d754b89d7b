use crate::core::errors::ListingError;
use chrono::{DateTime, Utc};

pub mod chrono_formatter;

/// Format profile used for the joined date column.
pub const LONG_DATE: &str = "social_long_date";

pub trait DateFormatter: Send + Sync {
    fn format(&self, timestamp: DateTime<Utc>, profile: &str) -> Result<String, ListingError>;
}

use crate::core::errors::ListingError;
use crate::infrastructure::formatting::{DateFormatter, LONG_DATE};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Formats timestamps with named strftime patterns.
#[derive(Clone)]
pub struct ChronoDateFormatter {
    profiles: Arc<HashMap<String, String>>,
}

impl ChronoDateFormatter {
    pub fn new(long_date_pattern: &str) -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(LONG_DATE.to_string(), long_date_pattern.to_string());
        profiles.insert("short".to_string(), "%d/%m/%Y - %H:%M".to_string());
        profiles.insert("html_date".to_string(), "%Y-%m-%d".to_string());
        ChronoDateFormatter {
            profiles: Arc::new(profiles),
        }
    }

    pub fn with_profile(mut self, name: &str, pattern: &str) -> Self {
        Arc::make_mut(&mut self.profiles).insert(name.to_string(), pattern.to_string());
        self
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, timestamp: DateTime<Utc>, profile: &str) -> Result<String, ListingError> {
        let pattern = self
            .profiles
            .get(profile)
            .ok_or_else(|| ListingError::FormatError(format!("Unknown date format profile {}", profile)))?;
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(ListingError::FormatError(format!(
                "Invalid pattern `{}` for date format profile {}",
                pattern, profile
            )));
        }
        Ok(timestamp.format_with_items(items.into_iter()).to_string())
    }
}

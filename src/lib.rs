pub mod api;
pub mod config;
pub mod core;
pub mod demo;
pub mod infrastructure;

pub use crate::core::errors::ListingError;
pub use crate::core::services::{MembershipListBuilder, MembershipListingService};
pub use crate::demo::{DemoContent, DemoContentParser};
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;

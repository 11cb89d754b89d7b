use crate::core::errors::ListingError;
use crate::core::models::{Action, EntityRef};
use async_trait::async_trait;

pub mod in_memory;

/// Answers access questions for the account the listing is rendered for.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    async fn can_access(&self, entity: &EntityRef, action: Action) -> Result<bool, ListingError>;
}

use crate::core::errors::ListingError;
use crate::core::models::{Action, EntityRef};
use crate::infrastructure::access::PermissionChecker;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Grants keyed by account. A grant covers either one entity or a whole entity type.
#[derive(Clone, Default)]
pub struct GrantTable {
    grants: Arc<RwLock<HashMap<String, HashSet<(String, Option<String>, Action)>>>>,
}

impl GrantTable {
    pub fn new() -> Self {
        GrantTable::default()
    }

    pub async fn grant_type(&self, account_id: &str, entity_type: &str, action: Action) {
        let mut grants = self.grants.write().await;
        grants
            .entry(account_id.to_string())
            .or_default()
            .insert((entity_type.to_string(), None, action));
    }

    pub async fn grant_entity(&self, account_id: &str, entity: &EntityRef, action: Action) {
        let mut grants = self.grants.write().await;
        grants
            .entry(account_id.to_string())
            .or_default()
            .insert((entity.entity_type.clone(), Some(entity.id.clone()), action));
    }

    pub fn for_account(&self, account_id: impl Into<String>) -> AccountPermissions {
        AccountPermissions {
            table: self.clone(),
            account_id: account_id.into(),
        }
    }

    async fn allows(&self, account_id: &str, entity: &EntityRef, action: Action) -> bool {
        let grants = self.grants.read().await;
        grants.get(account_id).is_some_and(|set| {
            set.contains(&(entity.entity_type.clone(), None, action))
                || set.contains(&(entity.entity_type.clone(), Some(entity.id.clone()), action))
        })
    }
}

/// Permission context of a single account.
#[derive(Clone)]
pub struct AccountPermissions {
    table: GrantTable,
    account_id: String,
}

#[async_trait]
impl PermissionChecker for AccountPermissions {
    async fn can_access(&self, entity: &EntityRef, action: Action) -> Result<bool, ListingError> {
        Ok(self.table.allows(&self.account_id, entity, action).await)
    }
}

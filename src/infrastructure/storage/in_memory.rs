use crate::core::errors::ListingError;
use crate::core::models::{Group, ListingPage, Membership};
use crate::infrastructure::storage::{MembershipFilter, MembershipStore, SortKey, compare_ids};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    groups: Arc<RwLock<HashMap<String, Group>>>,
    memberships: Arc<RwLock<HashMap<String, Membership>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            groups: Arc::new(RwLock::new(HashMap::new())),
            memberships: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn save_group(&self, group: Group) -> Result<(), ListingError> {
        let mut groups = self.groups.write().await;
        groups.insert(group.id.clone(), group);
        Ok(())
    }

    /// Stores a group content record. The group of an existing record never changes.
    pub async fn save_membership(&self, membership: Membership) -> Result<(), ListingError> {
        if !self.groups.read().await.contains_key(membership.gid()) {
            return Err(ListingError::GroupNotFound(membership.gid().to_string()));
        }
        let mut memberships = self.memberships.write().await;
        if let Some(existing) = memberships.get(&membership.id) {
            if existing.gid() != membership.gid() {
                return Err(ListingError::StorageError(format!(
                    "Membership {} already belongs to group {}",
                    membership.id,
                    existing.gid()
                )));
            }
        }
        memberships.insert(membership.id.clone(), membership);
        Ok(())
    }
}

#[async_trait]
impl MembershipStore for InMemoryStorage {
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, ListingError> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).cloned())
    }

    async fn find(
        &self,
        filter: &MembershipFilter,
        sort: SortKey,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<ListingPage, ListingError> {
        let memberships = self.memberships.read().await;
        let mut matches: Vec<&Membership> = memberships
            .values()
            .filter(|m| m.gid() == filter.gid && m.content_plugin.contains(&filter.kind_contains))
            .collect();
        match sort {
            SortKey::Id => matches.sort_by(|a, b| compare_ids(&a.id, &b.id)),
            SortKey::Created => {
                matches.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| compare_ids(&a.id, &b.id)))
            }
        }

        let total = matches.len();
        let offset = offset.unwrap_or(0);
        let ids: Vec<String> = matches
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .map(|m| m.id.clone())
            .collect();
        debug!("Found {} of {} group content records for group {}", ids.len(), total, filter.gid);

        Ok(ListingPage {
            ids,
            total,
            offset,
            limit,
        })
    }

    async fn load(&self, ids: &[String]) -> Result<Vec<Membership>, ListingError> {
        let memberships = self.memberships.read().await;
        Ok(ids.iter().filter_map(|id| memberships.get(id).cloned()).collect())
    }
}

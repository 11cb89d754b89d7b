use crate::core::errors::{FieldError, ListingError};
use crate::core::models::{Group, ListingPage, Membership};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::str::FromStr;

pub mod in_memory;

/// Conditions a group content query must satisfy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipFilter {
    pub gid: String,
    /// Substring the content plugin id must contain.
    pub kind_contains: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    Created,
}

impl FromStr for SortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "created" => Ok(SortKey::Created),
            other => Err(ListingError::InvalidInput(
                "sort".to_string(),
                FieldError {
                    field: "sort".to_string(),
                    title: "Invalid sort".to_string(),
                    description: format!("Cannot sort by `{}`", other),
                },
            )),
        }
    }
}

/// Orders entity ids numerically when both are numeric, lexically otherwise.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, ListingError>;
    async fn find(
        &self,
        filter: &MembershipFilter,
        sort: SortKey,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<ListingPage, ListingError>;
    async fn load(&self, ids: &[String]) -> Result<Vec<Membership>, ListingError>;
}

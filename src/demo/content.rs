use crate::core::errors::ListingError;
use crate::core::models::{EntityRef, Group, GROUP_MEMBERSHIP, Membership, Profile, Role};
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

fn default_kind() -> String {
    GROUP_MEMBERSHIP.to_string()
}

fn default_entity_type() -> String {
    "user".to_string()
}

#[derive(Debug, Deserialize)]
pub struct DemoGroup {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct DemoProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub organization: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DemoMembership {
    #[serde(default)]
    pub id: Option<String>,
    pub group: String,
    pub member: String,
    #[serde(default = "default_entity_type")]
    pub entity_type: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
    pub created: DateTime<Utc>,
    /// Role ids, resolved against the document's roles.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub profile: Option<DemoProfile>,
}

/// Typed form of a group demo content document.
#[derive(Debug, Default, Deserialize)]
pub struct DemoContent {
    #[serde(default)]
    pub groups: Vec<DemoGroup>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub memberships: Vec<DemoMembership>,
}

impl DemoContent {
    pub fn from_value(value: serde_yaml::Value) -> Result<Self, ListingError> {
        serde_yaml::from_value(value).map_err(|e| ListingError::DemoContentError(format!("Invalid demo content: {}", e)))
    }

    /// Writes the groups and memberships into `storage`.
    pub async fn seed(self, storage: &InMemoryStorage) -> Result<(), ListingError> {
        let roles: HashMap<String, Role> = self.roles.into_iter().map(|r| (r.id.clone(), r)).collect();
        let (groups, memberships) = (self.groups.len(), self.memberships.len());

        for group in self.groups {
            storage
                .save_group(Group {
                    id: group.id,
                    label: group.label,
                })
                .await?;
        }

        for item in self.memberships {
            let resolved = item
                .roles
                .iter()
                .map(|id| {
                    roles
                        .get(id)
                        .cloned()
                        .ok_or_else(|| ListingError::DemoContentError(format!("Unknown role {}", id)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let id = item.id.unwrap_or_else(|| Uuid::new_v4().to_string());
            let mut membership = Membership::new(
                id,
                item.group,
                EntityRef::new(item.entity_type, item.member.clone()),
                item.kind,
                item.created,
            )
            .with_roles(resolved);
            if let Some(label) = item.label {
                membership = membership.with_label(label);
            }
            if let Some(profile) = item.profile {
                membership = membership.with_profile(Profile {
                    id: profile.id.unwrap_or_else(|| item.member.clone()),
                    display_name: profile.display_name,
                    organization: profile.organization,
                });
            }
            storage.save_membership(membership).await?;
        }

        info!("Seeded {} groups and {} group content records", groups, memberships);
        Ok(())
    }
}

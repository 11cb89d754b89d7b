use super::entity::EntityRef;
use super::group::{Profile, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content plugin id of group membership records.
pub const GROUP_MEMBERSHIP: &str = "group_membership";

/// Entity type of group content records themselves.
pub const GROUP_CONTENT: &str = "group_content";

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Membership {
    pub id: String,
    gid: String,
    /// The entity this content record points at, the member user for memberships.
    pub target: EntityRef,
    pub label: Option<String>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created: DateTime<Utc>,
    pub content_plugin: String,
    pub roles: Vec<Role>,
    pub profile: Option<Profile>,
}

impl Membership {
    pub fn new(
        id: impl Into<String>,
        gid: impl Into<String>,
        target: EntityRef,
        content_plugin: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Membership {
            id: id.into(),
            gid: gid.into(),
            target,
            label: None,
            created,
            content_plugin: content_plugin.into(),
            roles: Vec::new(),
            profile: None,
        }
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn gid(&self) -> &str {
        &self.gid
    }

    pub fn is_membership(&self) -> bool {
        self.content_plugin == GROUP_MEMBERSHIP
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(GROUP_CONTENT, self.id.clone())
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

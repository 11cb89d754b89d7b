use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub label: String,
}

impl Role {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Role {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Profile data attached to the member of a group membership.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub organization: Option<String>,
}

use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;
use utoipa::ToSchema;

/// One page of membership ids matching a listing query.
#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct ListingPage {
    pub ids: Vec<String>,
    /// Number of matches before offset and limit were applied.
    pub total: usize,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct LinkView {
    pub title: String,
    #[schema(value_type = String)]
    pub url: Url,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct ProfileSummary {
    pub profile_id: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Markup(String),
    Link(LinkView),
    Profile(ProfileSummary),
    Organization(String),
}

impl Cell {
    pub fn as_markup(&self) -> Option<&str> {
        match self {
            Cell::Markup(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, ToSchema, PartialEq, Eq)]
pub struct RowView {
    pub member: Option<Cell>,
    pub organization: Option<Cell>,
    pub created: Option<Cell>,
    pub group_role: Option<Cell>,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct Operation {
    pub key: String,
    pub title: String,
    pub weight: i32,
    #[schema(value_type = String)]
    pub url: Url,
    pub query: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct HeaderColumn {
    pub key: String,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct HeaderView {
    /// Columns in display order.
    pub columns: Vec<HeaderColumn>,
}

impl HeaderView {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label.as_str())
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RenderedRow {
    pub id: String,
    pub row: RowView,
    pub operations: Vec<Operation>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RenderedListing {
    pub header: HeaderView,
    pub rows: Vec<RenderedRow>,
    pub total: usize,
    pub offset: usize,
    pub limit: Option<usize>,
    pub empty: String,
}

use crate::core::errors::ListingError;
use crate::core::models::EntityRef;
use std::collections::BTreeMap;
use url::Url;

pub mod path_links;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkRel {
    Canonical,
    EditForm,
    DeleteForm,
}

impl LinkRel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRel::Canonical => "canonical",
            LinkRel::EditForm => "edit-form",
            LinkRel::DeleteForm => "delete-form",
        }
    }
}

pub trait LinkBuilder: Send + Sync {
    /// URL of `entity` for the given relation, `None` if the entity type has no such link.
    fn url(&self, entity: &EntityRef, rel: LinkRel) -> Result<Option<Url>, ListingError>;

    fn canonical_url(&self, entity: &EntityRef) -> Result<Option<Url>, ListingError> {
        self.url(entity, LinkRel::Canonical)
    }
}

/// Where the user returns to after an administrative operation.
pub trait RedirectDestination: Send + Sync {
    fn as_query_params(&self) -> BTreeMap<String, String>;
}

/// Redirects back to a fixed path, usually the current request path.
#[derive(Clone, Debug)]
pub struct PathDestination {
    path: String,
}

impl PathDestination {
    pub fn new(path: impl Into<String>) -> Self {
        PathDestination { path: path.into() }
    }
}

impl RedirectDestination for PathDestination {
    fn as_query_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("destination".to_string(), self.path.clone())])
    }
}

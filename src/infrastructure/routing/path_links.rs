use crate::core::errors::ListingError;
use crate::core::models::{EntityRef, GROUP_CONTENT};
use crate::infrastructure::routing::{LinkBuilder, LinkRel};
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Builds entity URLs from `{id}` path templates relative to a base URL.
#[derive(Clone)]
pub struct PathLinkBuilder {
    base_url: Url,
    templates: Arc<HashMap<(String, LinkRel), String>>,
}

impl PathLinkBuilder {
    pub fn new(base_url: &str) -> Result<Self, ListingError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ListingError::LinkError(format!("Invalid base url {}: {}", base_url, e)))?;
        let templates = HashMap::from([
            (("user".to_string(), LinkRel::Canonical), "/user/{id}".to_string()),
            (("node".to_string(), LinkRel::Canonical), "/node/{id}".to_string()),
            (
                (GROUP_CONTENT.to_string(), LinkRel::Canonical),
                "/group/content/{id}".to_string(),
            ),
            (
                (GROUP_CONTENT.to_string(), LinkRel::EditForm),
                "/group/content/{id}/edit".to_string(),
            ),
            (
                (GROUP_CONTENT.to_string(), LinkRel::DeleteForm),
                "/group/content/{id}/delete".to_string(),
            ),
        ]);
        Ok(PathLinkBuilder {
            base_url,
            templates: Arc::new(templates),
        })
    }

    pub fn with_template(mut self, entity_type: &str, rel: LinkRel, template: &str) -> Self {
        Arc::make_mut(&mut self.templates).insert((entity_type.to_string(), rel), template.to_string());
        self
    }

    pub fn without_template(mut self, entity_type: &str, rel: LinkRel) -> Self {
        Arc::make_mut(&mut self.templates).remove(&(entity_type.to_string(), rel));
        self
    }
}

impl LinkBuilder for PathLinkBuilder {
    fn url(&self, entity: &EntityRef, rel: LinkRel) -> Result<Option<Url>, ListingError> {
        let Some(template) = self.templates.get(&(entity.entity_type.clone(), rel)) else {
            return Ok(None);
        };
        let path = template.replace("{id}", &entity.id);
        self.base_url
            .join(&path)
            .map(Some)
            .map_err(|e| ListingError::LinkError(format!("Cannot build {} link for {}: {}", rel.as_str(), entity, e)))
    }
}

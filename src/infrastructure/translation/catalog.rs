use crate::infrastructure::translation::Translator;
use std::collections::HashMap;
use std::sync::Arc;

/// Looks source strings up in a fixed catalog and falls back to the source string.
#[derive(Clone, Default)]
pub struct CatalogTranslator {
    entries: Arc<HashMap<String, String>>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        CatalogTranslator::default()
    }

    pub fn with_entry(mut self, source: &str, translation: &str) -> Self {
        Arc::make_mut(&mut self.entries).insert(source.to_string(), translation.to_string());
        self
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, source: &str) -> String {
        self.entries
            .get(source)
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}

pub mod catalog;

/// Resolves a source string to its localized form.
pub trait Translator: Send + Sync {
    fn translate(&self, source: &str) -> String;
}

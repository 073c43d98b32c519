//! Translator trait.

use crate::error::TranslationError;

/// Message catalogue lookup.
pub trait Translator: Send + Sync {
    /// Translate `id` in `domain`, replacing each `(placeholder, value)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when the catalogue cannot be read.
    fn trans(
        &self,
        id: &str,
        parameters: &[(&str, &str)],
        domain: &str,
    ) -> Result<String, TranslationError>;
}

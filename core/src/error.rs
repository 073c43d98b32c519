//! Error types for context construction and domain value objects.

use thiserror::Error;

/// Result type alias for context construction.
pub type Result<T> = std::result::Result<T, ContextError>;

/// Failure reported by a [`TabRepository`](crate::providers::TabRepository) lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TabLookupError {
    /// No tab is registered for the requested class name.
    ///
    /// This is the only failure the tab resolver recovers from.
    #[error("No tab registered for class name {class_name}")]
    NotFound {
        /// Class name that was looked up
        class_name: String,
    },

    /// The registry itself failed (connection, query, mapping).
    #[error("Tab registry error: {0}")]
    Backend(String),
}

/// Failure reported by a [`Translator`](crate::providers::Translator).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to translate \"{id}\" in domain {domain}: {reason}")]
pub struct TranslationError {
    /// Message id that could not be translated
    pub id: String,
    /// Translation domain
    pub domain: String,
    /// Underlying reason
    pub reason: String,
}

/// Errors that abort the construction of a controller context.
///
/// Recoverable conditions (unknown tab, unrecognised controller naming) are
/// handled inside the resolvers and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The tab registry failed for a reason other than "not found".
    #[error("Tab lookup failed for {controller}: {source}")]
    TabRegistry {
        /// Controller whose tab was being resolved
        controller: String,
        /// Registry failure
        #[source]
        source: TabLookupError,
    },

    /// A notification message could not be translated.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Validation failures of product pack value objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductPackConstraint {
    /// Stock type outside the allowed set.
    #[error("Cannot use product pack stock type {value}, allowed values are: {allowed}")]
    InvalidStockType {
        /// Rejected value
        value: String,
        /// Comma separated list of the allowed values
        allowed: String,
    },
}

/// Configuration loading errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Variable name
        key: String,
        /// Offending value
        value: String,
    },
}

impl ContextError {
    /// Returns `true` if the failure comes from an external collaborator
    /// (registry or translator) rather than from the request itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backoffice_core::{ContextError, TabLookupError};
    /// let err = ContextError::TabRegistry {
    ///     controller: "AdminCartsController".to_string(),
    ///     source: TabLookupError::Backend("connection reset".to_string()),
    /// };
    /// assert!(err.is_collaborator_failure());
    /// ```
    #[must_use]
    pub const fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::TabRegistry { .. } | Self::Translation(_))
    }
}

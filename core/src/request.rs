//! Request classification.
//!
//! The builder only needs two read-only views of the incoming request:
//! routing attributes and query parameters. [`RequestSource`] abstracts
//! them so the classifier works on any HTTP stack.

use crate::constants::{CONTROLLER_QUERY_PARAMETER, DEFAULT_CONTROLLER, LEGACY_CONTROLLER_ATTRIBUTE};
use std::collections::HashMap;

/// Read access to the parts of a request the classifier looks at.
pub trait RequestSource {
    /// Routing attribute set by the router (e.g. `_legacy_controller`).
    fn attribute(&self, key: &str) -> Option<&str>;

    /// Decoded query string parameter.
    fn query_param(&self, key: &str) -> Option<&str>;
}

/// Owned request attributes and query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    attributes: HashMap<String, String>,
    query: HashMap<String, String>,
}

impl RequestParameters {
    /// Create empty request parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a routing attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Build from decoded query pairs. On duplicate keys the last value wins.
    #[must_use]
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: HashMap::new(),
            query: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl RequestSource for RequestParameters {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// Derive the legacy controller name of a request.
///
/// First match wins: the `_legacy_controller` attribute, then the
/// `controller` query parameter, then [`DEFAULT_CONTROLLER`]. A present but
/// empty value still counts as a match.
#[must_use]
pub fn controller_name<R: RequestSource + ?Sized>(request: &R) -> String {
    let name = request
        .attribute(LEGACY_CONTROLLER_ATTRIBUTE)
        .or_else(|| request.query_param(CONTROLLER_QUERY_PARAMETER))
        .unwrap_or(DEFAULT_CONTROLLER);

    tracing::trace!(controller = %name, "Classified legacy request");
    name.to_string()
}

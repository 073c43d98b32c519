//! Tab registry trait.

use crate::error::TabLookupError;
use std::future::Future;
use std::pin::Pin;

/// Registry of admin navigation tabs.
///
/// This trait abstracts over the tab table of the back office database.
pub trait TabRepository: Send + Sync {
    /// Get the id of the tab whose class name is `class_name`.
    ///
    /// # Errors
    ///
    /// - [`TabLookupError::NotFound`] when no tab is registered for the name
    /// - [`TabLookupError::Backend`] when the registry cannot be queried
    fn id_by_class_name<'a>(
        &'a self,
        class_name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<i32, TabLookupError>> + Send + 'a>>;
}

//! Tab id resolution.

use crate::context::ControllerContext;
use crate::error::{ContextError, Result, TabLookupError};
use crate::providers::TabRepository;

/// Resolve the tab id of `controller`.
///
/// A controller unknown to the registry gets
/// [`ControllerContext::UNKNOWN_TAB_ID`]. Any other registry failure aborts
/// the request.
///
/// # Errors
///
/// Returns [`ContextError::TabRegistry`] when the registry fails for a
/// reason other than "not found".
pub async fn resolve_tab_id(tabs: &dyn TabRepository, controller: &str) -> Result<i32> {
    match tabs.id_by_class_name(controller).await {
        Ok(id) => Ok(id),
        Err(TabLookupError::NotFound { .. }) => {
            tracing::debug!(controller, "No tab registered, using sentinel id");
            Ok(ControllerContext::UNKNOWN_TAB_ID)
        }
        Err(source) => {
            tracing::warn!(controller, error = %source, "Tab registry lookup failed");
            Err(ContextError::TabRegistry {
                controller: controller.to_string(),
                source,
            })
        }
    }
}

//! Legacy controller context endpoint.

use crate::extractors::CurrentController;
use axum::Json;
use backoffice_core::ControllerContext;

/// JSON view of the context built for the current request.
///
/// Needs the legacy context layer on the route; without it the extractor
/// rejects with `CONTEXT_MISSING`.
///
/// # Endpoint
///
/// ```text
/// GET /admin/index.php?controller=AdminCartsController
/// ```
#[allow(clippy::unused_async)]
pub async fn current_controller(
    CurrentController(controller): CurrentController,
) -> Json<ControllerContext> {
    tracing::debug!(controller = %controller.controller_name(), "Serving legacy controller context");
    Json(controller)
}

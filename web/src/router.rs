//! Back office router.

use crate::extractors::LegacyControllerRoute;
use crate::handlers::{current_controller, health_check};
use crate::middleware::legacy_context_layer;
use crate::state::AppState;
use std::convert::Infallible;
use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

/// Path of the legacy front dispatcher, routed by the `controller` query parameter.
pub const LEGACY_DISPATCH_PATH: &str = "/admin/index.php";

/// Build the back office router.
///
/// - `GET /health`: liveness
/// - `GET /admin/index.php?controller=...`: context of the requested controller
/// - every migrated route of `state`: context of its bound controller
pub fn router(state: &AppState) -> Router {
    let mut app = Router::new().route("/health", get(health_check)).route(
        LEGACY_DISPATCH_PATH,
        get(current_controller).layer(legacy_context_layer(state.builder())),
    );

    for (path, controller) in state.legacy_routes() {
        app = app.route(
            path,
            get(current_controller)
                .layer::<_, Infallible>(legacy_context_layer(state.builder()))
                .layer(Extension(LegacyControllerRoute::new(controller.as_str()))),
        );
    }

    app.layer(TraceLayer::new_for_http())
}

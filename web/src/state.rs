//! Application state for the back office router.

use backoffice_core::LegacyControllerContextBuilder;
use std::sync::Arc;

/// Shared state of the back office router.
///
/// Holds the context builder and the routes migrated from the legacy
/// dispatcher, each bound to the controller that serves it.
///
/// # Examples
///
/// ```ignore
/// let state = AppState::new(builder)
///     .with_legacy_route("/admin/carts", "AdminCartsController")
///     .with_legacy_route("/admin/orders", "AdminOrdersController");
///
/// let app = router(&state);
/// ```
#[derive(Clone, Debug)]
pub struct AppState {
    builder: Arc<LegacyControllerContextBuilder>,
    legacy_routes: Vec<(String, String)>,
}

impl AppState {
    /// Create state around `builder` with no migrated routes.
    #[must_use]
    pub fn new(builder: LegacyControllerContextBuilder) -> Self {
        Self {
            builder: Arc::new(builder),
            legacy_routes: Vec::new(),
        }
    }

    /// Serve `path` with the legacy controller `controller`.
    #[must_use]
    pub fn with_legacy_route(mut self, path: impl Into<String>, controller: impl Into<String>) -> Self {
        self.legacy_routes.push((path.into(), controller.into()));
        self
    }

    /// Shared context builder.
    #[must_use]
    pub fn builder(&self) -> Arc<LegacyControllerContextBuilder> {
        Arc::clone(&self.builder)
    }

    /// Migrated routes as `(path, controller)` pairs.
    #[must_use]
    pub fn legacy_routes(&self) -> &[(String, String)] {
        &self.legacy_routes
    }
}

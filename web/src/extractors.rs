//! Custom Axum extractors.
//!
//! - [`CurrentController`]: the context built by the legacy context layer
//! - [`LegacyControllerRoute`]: the `_legacy_controller` attribute of a route
//!
//! # Examples
//!
//! ```ignore
//! use backoffice_web::extractors::CurrentController;
//!
//! async fn handler(CurrentController(controller): CurrentController) -> String {
//!     format!("Tab {}", controller.id())
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{Extensions, Uri, request::Parts},
};
use backoffice_core::{ControllerContext, LEGACY_CONTROLLER_ATTRIBUTE, RequestParameters};

/// Legacy controller context of the current request.
///
/// Rejects with `500 CONTEXT_MISSING` when the legacy context layer is not
/// installed on the route.
#[derive(Debug, Clone)]
pub struct CurrentController(pub ControllerContext);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentController
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ControllerContext>()
            .cloned()
            .map(Self)
            .ok_or_else(AppError::context_missing)
    }
}

/// Routing attribute naming the legacy controller that serves a route.
///
/// Attach it with `Extension(LegacyControllerRoute::new("AdminCartsController"))`
/// outside the legacy context layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyControllerRoute(pub String);

impl LegacyControllerRoute {
    /// Route served by `controller`.
    #[must_use]
    pub fn new(controller: impl Into<String>) -> Self {
        Self(controller.into())
    }

    /// Controller name.
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.0
    }
}

/// Collect the classifier inputs of a request.
///
/// The query string is decoded with `serde_urlencoded`; an undecodable query
/// counts as empty.
#[must_use]
pub fn request_parameters(uri: &Uri, extensions: &Extensions) -> RequestParameters {
    let pairs = uri.query().map_or_else(Vec::new, |query| {
        serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_else(|err| {
            tracing::debug!(error = %err, query, "Ignoring undecodable query string");
            Vec::new()
        })
    });

    let parameters = RequestParameters::from_query_pairs(pairs);
    match extensions.get::<LegacyControllerRoute>() {
        Some(route) => parameters.with_attribute(LEGACY_CONTROLLER_ATTRIBUTE, route.controller()),
        None => parameters,
    }
}

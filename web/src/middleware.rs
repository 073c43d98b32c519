//! Axum middleware building the legacy controller context.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Extension, Router, routing::get};
//! use backoffice_web::{LegacyControllerRoute, legacy_context_layer};
//!
//! let app = Router::new().route(
//!     "/admin/carts",
//!     get(list_carts)
//!         .layer(legacy_context_layer(builder))
//!         .layer(Extension(LegacyControllerRoute::new("AdminCartsController"))),
//! );
//! ```
//!
//! # Flow
//!
//! 1. **Collect** the routing attribute and query parameters
//! 2. **Build** the context into a fresh per-request [`ControllerSlot`]
//! 3. **Store** the context in request extensions for [`CurrentController`](crate::CurrentController)
//! 4. **Abort** with a JSON error response when the build fails

use crate::error::AppError;
use crate::extractors::request_parameters;
use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use backoffice_core::request::controller_name;
use backoffice_core::{ControllerSlot, LegacyControllerContextBuilder};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Instrument;

/// Create a layer that builds the legacy controller context of every request.
#[must_use]
pub fn legacy_context_layer(builder: Arc<LegacyControllerContextBuilder>) -> LegacyContextLayer {
    LegacyContextLayer { builder }
}

/// Layer building the legacy controller context.
#[derive(Clone, Debug)]
pub struct LegacyContextLayer {
    builder: Arc<LegacyControllerContextBuilder>,
}

impl<S> Layer<S> for LegacyContextLayer {
    type Service = LegacyContextMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LegacyContextMiddleware {
            inner,
            builder: Arc::clone(&self.builder),
        }
    }
}

/// Middleware service building the legacy controller context.
#[derive(Clone, Debug)]
pub struct LegacyContextMiddleware<S> {
    inner: S,
    builder: Arc<LegacyControllerContextBuilder>,
}

impl<S> Service<Request> for LegacyContextMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        // The ready service handles this request; the clone waits for the next one.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let builder = Arc::clone(&self.builder);

        let parameters = request_parameters(req.uri(), req.extensions());
        let span = tracing::info_span!(
            "legacy_context",
            controller = %controller_name(&parameters),
            method = %req.method(),
            uri = %req.uri(),
        );

        Box::pin(
            async move {
                let mut slot = ControllerSlot::default();
                if let Err(err) = builder.build_legacy_context(&parameters, &mut slot).await {
                    return Ok(AppError::from(err).into_response());
                }

                match slot.take() {
                    Some(controller) => {
                        req.extensions_mut().insert(controller);
                    }
                    None => return Ok(AppError::context_missing().into_response()),
                }

                inner.call(req).await
            }
            .instrument(span),
        )
    }
}

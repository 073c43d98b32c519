//! Axum integration for the back office legacy controller context.
//!
//! Every admin request gets its own [`ControllerContext`](backoffice_core::ControllerContext),
//! built by [`legacy_context_layer`] before the handler runs and read back
//! with the [`CurrentController`] extractor.
//!
//! # Request Flow
//!
//! ```text
//! HTTP request
//!     │  Extension(LegacyControllerRoute)   (migrated routes only)
//!     ▼
//! legacy_context_layer ── build fails ──▶ 500 JSON { code, message }
//!     │  ControllerContext in extensions
//!     ▼
//! handler(CurrentController)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use backoffice_core::{ContextEnvironment, LegacyContextConfig, LegacyControllerContextBuilder};
//! use backoffice_web::{AppState, router};
//!
//! let config = LegacyContextConfig::from_env()?;
//! let builder = LegacyControllerContextBuilder::new(environment, config);
//! let state = AppState::new(builder).with_legacy_route("/admin/carts", "AdminCartsController");
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router(&state)).await?;
//! ```

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{CurrentController, LegacyControllerRoute, request_parameters};
pub use middleware::{LegacyContextLayer, legacy_context_layer};
pub use router::{LEGACY_DISPATCH_PATH, router};
pub use state::AppState;

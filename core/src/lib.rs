//! # Backoffice Core
//!
//! Request-scoped context construction for legacy admin controllers.
//!
//! Every admin request that is still served by a legacy controller needs a
//! [`ControllerContext`]: which controller is running, which entity class it
//! edits, its navigation tab, its security token, the shops it may act on and
//! the notification messages the rendering layer can show.
//!
//! ## Flow
//!
//! ```text
//!                 ┌──────────────────────┐
//!   Request ────▶ │  Request Classifier  │  attribute → query → default
//!                 └──────────┬───────────┘
//!                            │ controller name
//!        ┌───────────────┬───┴───────────┬────────────────────┐
//!        ▼               ▼               ▼                    ▼
//!  ┌───────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────────┐
//!  │ Tab       │  │ Class name  │  │ Shop-link   │  │ Multishop scope  │
//!  │ resolver  │  │ mapper      │  │ policy      │  │ resolver         │
//!  └─────┬─────┘  └──────┬──────┘  └──────┬──────┘  └────────┬─────────┘
//!        └───────────────┴───────┬───────┴───────────────────┘
//!                                ▼
//!                 ┌──────────────────────┐
//!                 │  Context assembler   │ ──▶ ContextStateManager
//!                 └──────────────────────┘
//! ```
//!
//! ## Collaborators
//!
//! Everything the builder does not own is injected through the traits in
//! [`providers`]: the tab registry, the translator, the multistore flag, the
//! employee and shop contexts and the token generator. There is no global
//! "current controller": the caller passes its own [`ContextStateManager`]
//! (usually a per-request [`ControllerSlot`]).
//!
//! ## Example
//!
//! ```ignore
//! use backoffice_core::*;
//!
//! let builder = LegacyControllerContextBuilder::new(environment, config);
//! let request = RequestParameters::new().with_attribute(
//!     LEGACY_CONTROLLER_ATTRIBUTE,
//!     "AdminCartsController",
//! );
//!
//! let mut slot = ControllerSlot::default();
//! builder.build_legacy_context(&request, &mut slot).await?;
//!
//! let controller = slot.controller().expect("registered");
//! assert_eq!(controller.class_name(), Some("Cart"));
//! ```

pub mod assets;
pub mod builder;
pub mod config;
pub mod constants;
pub mod context;
pub mod environment;
pub mod error;
pub mod inflector;
pub mod messages;
pub mod naming;
pub mod pack;
pub mod paths;
pub mod policy;
pub mod providers;
pub mod request;
pub mod shop;
pub mod tab;

// Re-export main types for convenience
pub use assets::PageAssets;
pub use builder::LegacyControllerContextBuilder;
pub use config::LegacyContextConfig;
pub use constants::{
    AUTH_COOKIE_LIFETIME, CONTROLLER_QUERY_PARAMETER, DEFAULT_CONTROLLER,
    LEGACY_CONTROLLER_ATTRIBUTE,
};
pub use context::{ControllerContext, ControllerKind, MessageTable};
pub use environment::ContextEnvironment;
pub use error::{
    ConfigError, ContextError, ProductPackConstraint, Result, TabLookupError, TranslationError,
};
pub use pack::PackStockType;
pub use providers::{
    ContextStateManager, ControllerSlot, EmployeeContext, MediaResolver, MultistoreFeature,
    MultistoreFlag, SaltedTokenGenerator, ShopContext, TabRepository, TokenGenerator, Translator,
};
pub use request::{RequestParameters, RequestSource};
pub use shop::{ShopConstraint, ShopLinkType};

//! Context collaborators.
//!
//! This module defines traits for every external dependency of the context
//! builder. The builder holds them as `Arc<dyn Trait>`, so each trait is
//! object safe; the asynchronous tab lookup returns a boxed future for that
//! reason.
//!
//! ```text
//! ┌────────────────────────────────┐
//! │ LegacyControllerContextBuilder │
//! └───────┬────────────────────────┘
//!         │ depends on (traits)
//!         ▼
//! TabRepository   Translator   MultistoreFeature
//! EmployeeContext ShopContext  TokenGenerator
//!         │
//!         ▼ registers into
//! ContextStateManager (per request)
//! ```
//!
//! This enables:
//! - **Testing**: in-memory mocks from `backoffice-testing`
//! - **Production**: database-backed registry, real catalogue translator
//! - **Web**: one [`ControllerSlot`] per request instead of a global

pub mod employee;
pub mod media;
pub mod shop;
pub mod state;
pub mod tab;
pub mod token;
pub mod translator;

pub use employee::EmployeeContext;
pub use media::MediaResolver;
pub use shop::{MultistoreFeature, MultistoreFlag, ShopContext};
pub use state::{ContextStateManager, ControllerSlot};
pub use tab::TabRepository;
pub use token::{SaltedTokenGenerator, TokenGenerator};
pub use translator::Translator;

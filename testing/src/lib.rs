//! # Back Office Testing
//!
//! Testing utilities for the legacy controller context builder.
//!
//! This crate provides:
//! - In-memory implementations of the builder's collaborator traits
//! - A ready-made [`ContextEnvironment`] and builder for tests
//! - proptest strategies for controller names
//!
//! ## Example
//!
//! ```ignore
//! use backoffice_testing::{test_builder, carts_request};
//!
//! #[tokio::test]
//! async fn test_carts_context() {
//!     let builder = test_builder(LegacyContextConfig::new("/srv/shop"));
//!     let controller = builder.build(&carts_request()).await.unwrap();
//!
//!     assert_eq!(controller.class_name(), Some("Cart"));
//! }
//! ```

use backoffice_core::{ContextEnvironment, LegacyContextConfig, LegacyControllerContextBuilder};
use std::sync::Arc;

pub mod mocks;

pub use mocks::{
    EchoTranslator, FixedEmployee, FixedShop, IdentityMediaResolver, InMemoryTabRepository,
    RecordingStateManager,
};

/// Test helpers and fixtures.
pub mod helpers {
    use super::{
        Arc, ContextEnvironment, EchoTranslator, FixedEmployee, FixedShop, InMemoryTabRepository,
        LegacyContextConfig, LegacyControllerContextBuilder,
    };
    use backoffice_core::{LEGACY_CONTROLLER_ATTRIBUTE, RequestParameters};

    /// Employee id used by [`test_environment`].
    pub const TEST_EMPLOYEE_ID: u32 = 20;

    /// Shop name used by [`test_environment`].
    pub const TEST_SHOP_NAME: &str = "TotoShop";

    /// Tab id of `AdminCartsController` in [`test_tabs`].
    pub const CARTS_TAB_ID: i32 = 10;

    /// Tab registry holding a handful of stock back office controllers.
    #[must_use]
    pub fn test_tabs() -> InMemoryTabRepository {
        InMemoryTabRepository::new()
            .with_tab("AdminCartsController", CARTS_TAB_ID)
            .with_tab("AdminOrdersController", 11)
            .with_tab("AdminCustomerThreadsController", 12)
            .with_tab("AdminProductsController", 13)
    }

    /// Environment with a logged-in employee, a named shop and [`test_tabs`].
    ///
    /// The token salt and the multistore flag come from `config`.
    #[must_use]
    pub fn test_environment(config: &LegacyContextConfig) -> ContextEnvironment {
        environment_with(config, test_tabs(), EchoTranslator::new())
    }

    /// Environment sharing the given tab registry and translator.
    ///
    /// Keep clones of the mocks to flip their failure switches mid-test.
    #[must_use]
    pub fn environment_with(
        config: &LegacyContextConfig,
        tabs: InMemoryTabRepository,
        translator: EchoTranslator,
    ) -> ContextEnvironment {
        ContextEnvironment::from_config(
            config,
            Arc::new(FixedEmployee::logged_in(TEST_EMPLOYEE_ID)),
            Arc::new(FixedShop::new(TEST_SHOP_NAME)),
            Arc::new(tabs),
            Arc::new(translator),
        )
    }

    /// Builder over [`test_environment`].
    #[must_use]
    pub fn test_builder(config: LegacyContextConfig) -> LegacyControllerContextBuilder {
        LegacyControllerContextBuilder::new(test_environment(&config), config)
    }

    /// Request routed to `controller` through the legacy attribute.
    #[must_use]
    pub fn routed_request(controller: &str) -> RequestParameters {
        RequestParameters::new().with_attribute(LEGACY_CONTROLLER_ATTRIBUTE, controller)
    }

    /// Request routed to `AdminCartsController`.
    #[must_use]
    pub fn carts_request() -> RequestParameters {
        routed_request("AdminCartsController")
    }

    /// Install a test tracing subscriber honouring `RUST_LOG`.
    ///
    /// Safe to call from several tests; only the first call installs it.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// A CamelCase word such as `Cart` or `CustomerThread`.
    pub fn camel_word() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Z][a-z]{1,8}", 1..4).prop_map(|parts| parts.concat())
    }

    /// A conventional admin controller name: `Admin<Word>Controller`.
    pub fn admin_controller_name() -> impl Strategy<Value = String> {
        camel_word().prop_map(|word| format!("Admin{word}Controller"))
    }

    /// Any controller name, conventional or not.
    pub fn any_controller_name() -> impl Strategy<Value = String> {
        prop_oneof![admin_controller_name(), "[A-Za-z0-9_]{0,24}"]
    }
}

pub use helpers::{
    carts_request, environment_with, init_tracing, routed_request, test_builder, test_environment,
    test_tabs,
};

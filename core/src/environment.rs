//! Context environment.
//!
//! This module defines the environment type for dependency injection into
//! the context builder.

use crate::config::LegacyContextConfig;
use crate::providers::{
    EmployeeContext, MultistoreFeature, MultistoreFlag, SaltedTokenGenerator, ShopContext,
    TabRepository, TokenGenerator, Translator,
};
use std::sync::Arc;

/// Context environment.
///
/// Contains all external dependencies needed to build a controller context.
#[derive(Clone)]
pub struct ContextEnvironment {
    /// Logged-in employee.
    pub employee: Arc<dyn EmployeeContext>,

    /// Current shop.
    pub shop: Arc<dyn ShopContext>,

    /// Tab registry (database).
    pub tabs: Arc<dyn TabRepository>,

    /// Message catalogue.
    pub translator: Arc<dyn Translator>,

    /// Multistore flag.
    pub multistore: Arc<dyn MultistoreFeature>,

    /// Admin security token generator.
    pub tokens: Arc<dyn TokenGenerator>,
}

impl ContextEnvironment {
    /// Assemble an environment whose multistore flag and token salt come
    /// from `config`.
    ///
    /// This is how [`LegacyContextConfig::from_env`] settings reach the
    /// builder; set the fields directly only to plug in other providers.
    #[must_use]
    pub fn from_config(
        config: &LegacyContextConfig,
        employee: Arc<dyn EmployeeContext>,
        shop: Arc<dyn ShopContext>,
        tabs: Arc<dyn TabRepository>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            employee,
            shop,
            tabs,
            translator,
            multistore: Arc::new(MultistoreFlag(config.multistore_active)),
            tokens: Arc::new(SaltedTokenGenerator::new(config.cookie_key.clone())),
        }
    }
}

impl std::fmt::Debug for ContextEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextEnvironment")
            .field("employee_id", &self.employee.employee_id())
            .field("shop", &self.shop.name())
            .field("multistore_active", &self.multistore.is_active())
            .finish_non_exhaustive()
    }
}

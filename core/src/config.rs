//! Context builder configuration.
//!
//! Values are provided by the application, usually loaded from environment
//! variables with [`LegacyContextConfig::from_env`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the comma separated locked controller list.
pub const LOCKED_CONTROLLERS_VAR: &str = "BACKOFFICE_LOCKED_CONTROLLERS";
/// Environment variable holding the installation root directory.
pub const CORE_DIR_VAR: &str = "BACKOFFICE_CORE_DIR";
/// Environment variable holding the admin directory.
pub const ADMIN_DIR_VAR: &str = "BACKOFFICE_ADMIN_DIR";
/// Environment variable holding the cookie key used to salt tokens.
pub const COOKIE_KEY_VAR: &str = "BACKOFFICE_COOKIE_KEY";
/// Environment variable enabling multistore.
pub const MULTISTORE_ACTIVE_VAR: &str = "BACKOFFICE_MULTISTORE_ACTIVE";

/// Legacy controller context configuration.
///
/// `cookie_key` and `multistore_active` reach the builder through
/// [`ContextEnvironment::from_config`](crate::ContextEnvironment::from_config).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyContextConfig {
    /// Controllers that only work in the "all shops" scope.
    pub controllers_locked_to_all_shop_context: Vec<String>,

    /// Installation root directory, stripped from the admin directory.
    pub core_dir: String,

    /// Admin directory on disk, if the back office is installed.
    pub admin_dir: Option<String>,

    /// Secret salt of the admin security tokens.
    pub cookie_key: String,

    /// Whether multistore is enabled.
    ///
    /// Default: `false`
    pub multistore_active: bool,
}

impl LegacyContextConfig {
    /// Create a configuration for an installation rooted at `core_dir`.
    #[must_use]
    pub fn new(core_dir: impl Into<String>) -> Self {
        Self {
            core_dir: core_dir.into(),
            ..Self::default()
        }
    }

    /// Set the controllers locked to the "all shops" scope.
    #[must_use]
    pub fn with_locked_controllers<I, S>(mut self, controllers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controllers_locked_to_all_shop_context =
            controllers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the admin directory.
    #[must_use]
    pub fn with_admin_dir(mut self, admin_dir: impl Into<String>) -> Self {
        self.admin_dir = Some(admin_dir.into());
        self
    }

    /// Set the token salt.
    #[must_use]
    pub fn with_cookie_key(mut self, cookie_key: impl Into<String>) -> Self {
        self.cookie_key = cookie_key.into();
        self
    }

    /// Enable or disable multistore.
    #[must_use]
    pub const fn with_multistore(mut self, active: bool) -> Self {
        self.multistore_active = active;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Missing variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the multistore flag is not
    /// a recognised boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the multistore flag is not
    /// a recognised boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let multistore_active = match lookup(MULTISTORE_ACTIVE_VAR) {
            Some(value) => parse_flag(MULTISTORE_ACTIVE_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            controllers_locked_to_all_shop_context: lookup(LOCKED_CONTROLLERS_VAR)
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            core_dir: lookup(CORE_DIR_VAR).unwrap_or_default(),
            admin_dir: lookup(ADMIN_DIR_VAR).filter(|dir| !dir.is_empty()),
            cookie_key: lookup(COOKIE_KEY_VAR).unwrap_or_default(),
            multistore_active,
        })
    }
}

impl std::fmt::Debug for LegacyContextConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyContextConfig")
            .field(
                "controllers_locked_to_all_shop_context",
                &self.controllers_locked_to_all_shop_context,
            )
            .field("core_dir", &self.core_dir)
            .field("admin_dir", &self.admin_dir)
            .field("cookie_key", &"<redacted>")
            .field("multistore_active", &self.multistore_active)
            .finish()
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_builder() {
        let config = LegacyContextConfig::new("/var/www/shop")
            .with_locked_controllers(["AdminCartsController"])
            .with_admin_dir("/var/www/shop/admin-dev")
            .with_cookie_key("secret")
            .with_multistore(true);

        assert_eq!(config.core_dir, "/var/www/shop");
        assert_eq!(config.controllers_locked_to_all_shop_context, vec!["AdminCartsController"]);
        assert_eq!(config.admin_dir.as_deref(), Some("/var/www/shop/admin-dev"));
        assert_eq!(config.cookie_key, "secret");
        assert!(config.multistore_active);
    }

    #[test]
    fn test_debug_redacts_cookie_key() {
        let config = LegacyContextConfig::new("/srv/shop").with_cookie_key("s3cr3t-salt");
        let debug = format!("{config:?}");

        assert!(!debug.contains("s3cr3t-salt"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("/srv/shop"));
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = LegacyContextConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LegacyContextConfig::default());
    }

    #[test]
    fn test_from_lookup() {
        let config = LegacyContextConfig::from_lookup(lookup(&[
            (LOCKED_CONTROLLERS_VAR, "AdminCartsController, AdminLanguagesController,,"),
            (CORE_DIR_VAR, "/srv/shop"),
            (ADMIN_DIR_VAR, "/srv/shop/admin"),
            (COOKIE_KEY_VAR, "key"),
            (MULTISTORE_ACTIVE_VAR, "Yes"),
        ]))
        .unwrap();

        assert_eq!(
            config.controllers_locked_to_all_shop_context,
            vec!["AdminCartsController", "AdminLanguagesController"]
        );
        assert_eq!(config.core_dir, "/srv/shop");
        assert_eq!(config.admin_dir.as_deref(), Some("/srv/shop/admin"));
        assert_eq!(config.cookie_key, "key");
        assert!(config.multistore_active);
    }

    #[test]
    fn test_invalid_multistore_flag() {
        let err = LegacyContextConfig::from_lookup(lookup(&[(MULTISTORE_ACTIVE_VAR, "maybe")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: MULTISTORE_ACTIVE_VAR.to_string(),
                value: "maybe".to_string(),
            }
        );
    }
}

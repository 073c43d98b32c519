//! The controller context handed to the rendering layer.

use crate::shop::{ShopConstraint, ShopLinkType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Notification messages keyed by their numeric code.
pub type MessageTable = BTreeMap<u32, String>;

/// Kind of legacy controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    /// Storefront controller.
    #[serde(rename = "front")]
    Front,
    /// Storefront controller shipped by a module.
    #[serde(rename = "modulefront")]
    ModuleFront,
    /// Back-office controller.
    #[serde(rename = "admin")]
    Admin,
    /// Back-office controller shipped by a module.
    #[serde(rename = "moduleadmin")]
    ModuleAdmin,
}

impl ControllerKind {
    /// Legacy string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::ModuleFront => "modulefront",
            Self::Admin => "admin",
            Self::ModuleAdmin => "moduleadmin",
        }
    }

    /// Returns `true` for back-office kinds.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::ModuleAdmin)
    }
}

/// Configuration of the legacy controller serving the current request.
///
/// Built once per request by
/// [`LegacyControllerContextBuilder`](crate::builder::LegacyControllerContextBuilder)
/// and immutable afterwards. Rendering state (assets, flash messages, form
/// values) lives elsewhere, see [`PageAssets`](crate::assets::PageAssets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerContext {
    pub(crate) controller_name: String,
    pub(crate) php_self: String,
    pub(crate) kind: ControllerKind,
    pub(crate) class_name: Option<String>,
    pub(crate) id: i32,
    pub(crate) token: Option<String>,
    pub(crate) multishop_context: ShopConstraint,
    pub(crate) shop_link_type: ShopLinkType,
    pub(crate) conf: MessageTable,
    pub(crate) error: MessageTable,
    pub(crate) override_folder: String,
    pub(crate) tpl_folder: String,
    pub(crate) admin_webpath: Option<String>,
}

impl ControllerContext {
    /// Sentinel tab id of controllers unknown to the tab registry.
    pub const UNKNOWN_TAB_ID: i32 = -1;

    /// Controller name, e.g. `AdminCartsController`.
    #[must_use]
    pub fn controller_name(&self) -> &str {
        &self.controller_name
    }

    /// Script name the controller answers to.
    #[must_use]
    pub fn php_self(&self) -> &str {
        &self.php_self
    }

    /// Controller kind.
    #[must_use]
    pub const fn kind(&self) -> ControllerKind {
        self.kind
    }

    /// Entity class managed by the controller.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Tab id, [`Self::UNKNOWN_TAB_ID`] when the controller has no tab.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Returns `true` when the tab registry knows the controller.
    #[must_use]
    pub const fn has_tab(&self) -> bool {
        self.id != Self::UNKNOWN_TAB_ID
    }

    /// Security token, absent when no employee is logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Shop scopes the controller may be opened in.
    #[must_use]
    pub const fn multishop_context(&self) -> ShopConstraint {
        self.multishop_context
    }

    /// Shop-link policy.
    #[must_use]
    pub const fn shop_link_type(&self) -> ShopLinkType {
        self.shop_link_type
    }

    /// Success notifications by code.
    #[must_use]
    pub const fn conf(&self) -> &MessageTable {
        &self.conf
    }

    /// Error notifications by code.
    #[must_use]
    pub const fn error(&self) -> &MessageTable {
        &self.error
    }

    /// Folder of the controller's template overrides.
    #[must_use]
    pub fn override_folder(&self) -> &str {
        &self.override_folder
    }

    /// Folder of the controller's templates.
    #[must_use]
    pub fn tpl_folder(&self) -> &str {
        &self.tpl_folder
    }

    /// Admin directory relative to the installation root.
    #[must_use]
    pub fn admin_webpath(&self) -> Option<&str> {
        self.admin_webpath.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    fn sample() -> ControllerContext {
        ControllerContext {
            controller_name: "AdminOrdersController".to_string(),
            php_self: "AdminOrdersController".to_string(),
            kind: ControllerKind::Admin,
            class_name: Some("Order".to_string()),
            id: ControllerContext::UNKNOWN_TAB_ID,
            token: None,
            multishop_context: ShopConstraint::any_scope(),
            shop_link_type: ShopLinkType::SingleShop,
            conf: MessageTable::from([(1, "Successful deletion".to_string())]),
            error: MessageTable::new(),
            override_folder: "orders_controller/".to_string(),
            tpl_folder: "orders_controller/".to_string(),
            admin_webpath: None,
        }
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(ControllerKind::Admin.as_str(), "admin");
        assert_eq!(ControllerKind::ModuleFront.as_str(), "modulefront");
        assert!(ControllerKind::ModuleAdmin.is_admin());
        assert!(!ControllerKind::Front.is_admin());
    }

    #[test]
    fn test_unknown_tab() {
        assert!(!sample().has_tab());
    }

    #[test]
    fn test_serializes_legacy_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["kind"], "admin");
        assert_eq!(json["class_name"], "Order");
        assert_eq!(json["id"], -1);
        assert_eq!(json["shop_link_type"], "");
        assert_eq!(json["conf"]["1"], "Successful deletion");
    }
}

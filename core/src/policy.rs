//! Shop scoping policies for legacy controllers.

use crate::constants::SHOP_BOUND_CONTROLLERS;
use crate::shop::{ShopConstraint, ShopLinkType};

/// Decide whether a controller is pinned to a shop.
///
/// Shop-bound controllers always get [`ShopLinkType::Shop`]. Any other
/// controller is single-shop while multistore is off and unconstrained
/// once it is on.
#[must_use]
pub fn shop_link_type(controller: &str, multistore_active: bool) -> ShopLinkType {
    if SHOP_BOUND_CONTROLLERS.contains(&controller) {
        ShopLinkType::Shop
    } else if multistore_active {
        ShopLinkType::Unconstrained
    } else {
        ShopLinkType::SingleShop
    }
}

/// Scopes a controller may be opened in.
///
/// Controllers on the locked list only work in the "all shops" scope; every
/// other controller accepts any scope.
#[must_use]
pub fn multishop_scope<S: AsRef<str>>(controller: &str, locked: &[S]) -> ShopConstraint {
    if locked.iter().any(|name| name.as_ref() == controller) {
        ShopConstraint::ALL_SHOPS
    } else {
        ShopConstraint::any_scope()
    }
}

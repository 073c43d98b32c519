//! Shop scoping types: multishop constraint flags and shop-link policy.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

bitflags! {
    /// Granularity a controller may operate at in a multistore installation.
    ///
    /// The context builder only decides the *allowed* scopes; the business
    /// layer later narrows them to the employee's actual shop context.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ShopConstraint: u8 {
        /// A single shop.
        const SHOP = 1;
        /// A shop group.
        const SHOP_GROUP = 2;
        /// Every shop at once.
        const ALL_SHOPS = 4;
    }
}

impl ShopConstraint {
    /// Every scope a controller can be opened in.
    #[must_use]
    pub const fn any_scope() -> Self {
        Self::ALL_SHOPS.union(Self::SHOP_GROUP).union(Self::SHOP)
    }

    /// Returns `true` when the controller may only be used in the "all shops" scope.
    #[must_use]
    pub fn is_locked_to_all_shops(self) -> bool {
        self == Self::ALL_SHOPS
    }
}

/// Whether a controller's UI forces a shop association.
///
/// Serializes as its legacy value: `"shop"`, `""` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopLinkType {
    /// Records are tied to one shop (`"shop"`).
    Shop,
    /// Multistore is off: single shop, no shop selector (`""`).
    SingleShop,
    /// No constraint; default shop selection applies (`null`).
    Unconstrained,
}

impl ShopLinkType {
    /// Legacy string form: `Some("shop")`, `Some("")` or `None`.
    #[must_use]
    pub const fn as_legacy(self) -> Option<&'static str> {
        match self {
            Self::Shop => Some("shop"),
            Self::SingleShop => Some(""),
            Self::Unconstrained => None,
        }
    }
}

impl Serialize for ShopLinkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_legacy() {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ShopLinkType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            Some("shop") => Ok(Self::Shop),
            Some("") => Ok(Self::SingleShop),
            None => Ok(Self::Unconstrained),
            Some(other) => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"\"shop\", an empty string or null",
            )),
        }
    }
}

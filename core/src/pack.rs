//! Product pack value objects.

use crate::error::ProductPackConstraint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the available quantity of a product pack is computed.
///
/// Only the four stock types below exist; any other string is rejected at
/// construction, so a `PackStockType` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PackStockType {
    /// Only the pack's own quantity counts.
    PackOnly,
    /// Only the quantities of the packed products count.
    ProductsOnly,
    /// Both the pack and the packed products are decremented.
    Both,
    /// Use the shop's configured default.
    Default,
}

impl PackStockType {
    /// Every allowed stock type, in declaration order.
    pub const ALL: [Self; 4] = [Self::PackOnly, Self::ProductsOnly, Self::Both, Self::Default];

    /// Stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PackOnly => "stock_type_pack_only",
            Self::ProductsOnly => "stock_type_products_only",
            Self::Both => "stock_type_both",
            Self::Default => "stock_type_default",
        }
    }

    /// Parse and validate a stock type.
    ///
    /// # Errors
    ///
    /// Returns [`ProductPackConstraint::InvalidStockType`] when `value` is not
    /// one of the allowed stock types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backoffice_core::PackStockType;
    /// let stock = PackStockType::new("stock_type_both").unwrap();
    /// assert_eq!(stock.as_str(), "stock_type_both");
    /// assert!(PackStockType::new("stock_type_unknown").is_err());
    /// ```
    pub fn new(value: &str) -> Result<Self, ProductPackConstraint> {
        Self::ALL
            .into_iter()
            .find(|stock_type| stock_type.as_str() == value)
            .ok_or_else(|| ProductPackConstraint::InvalidStockType {
                value: value.to_string(),
                allowed: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

impl fmt::Display for PackStockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackStockType {
    type Err = ProductPackConstraint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackStockType {
    type Error = ProductPackConstraint;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PackStockType> for String {
    fn from(value: PackStockType) -> Self {
        value.as_str().to_string()
    }
}

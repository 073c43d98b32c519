//! Shop and multistore traits.

/// The shop the current request runs in.
pub trait ShopContext: Send + Sync {
    /// Display name of the current shop.
    fn name(&self) -> String;
}

/// Multistore capability flag.
pub trait MultistoreFeature: Send + Sync {
    /// Returns `true` when multistore is enabled and in use.
    fn is_active(&self) -> bool;
}

/// Multistore flag read once from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultistoreFlag(pub bool);

impl MultistoreFeature for MultistoreFlag {
    fn is_active(&self) -> bool {
        self.0
    }
}

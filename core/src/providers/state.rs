//! Registration of the current controller.

use crate::context::ControllerContext;

/// Receives the controller context once it is assembled.
///
/// Implementations are request scoped: the builder hands the context over by
/// value and never reads it back.
pub trait ContextStateManager {
    /// Register `controller` as the current controller.
    fn set_controller(&mut self, controller: ControllerContext);
}

/// Per-request holder of the current controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerSlot {
    controller: Option<ControllerContext>,
}

impl ControllerSlot {
    /// Registered controller, if any.
    #[must_use]
    pub const fn controller(&self) -> Option<&ControllerContext> {
        self.controller.as_ref()
    }

    /// Take the registered controller out of the slot.
    #[must_use]
    pub fn take(&mut self) -> Option<ControllerContext> {
        self.controller.take()
    }
}

impl ContextStateManager for ControllerSlot {
    fn set_controller(&mut self, controller: ControllerContext) {
        self.controller = Some(controller);
    }
}

//! Legacy controller context assembly.

use crate::config::LegacyContextConfig;
use crate::context::{ControllerContext, ControllerKind};
use crate::environment::ContextEnvironment;
use crate::error::Result;
use crate::messages::{conf_messages, error_messages};
use crate::naming::{class_name_for, override_folder};
use crate::paths::admin_web_path;
use crate::policy::{multishop_scope, shop_link_type};
use crate::providers::ContextStateManager;
use crate::request::{RequestSource, controller_name};
use crate::tab::resolve_tab_id;

/// Builds the [`ControllerContext`] of an admin request.
///
/// The builder is stateless between requests: the same request and the same
/// collaborator answers always produce an identical context.
///
/// # Example
///
/// ```ignore
/// let builder = LegacyControllerContextBuilder::new(environment, config);
///
/// let mut slot = ControllerSlot::default();
/// builder.build_legacy_context(&request, &mut slot).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LegacyControllerContextBuilder {
    env: ContextEnvironment,
    config: LegacyContextConfig,
}

impl LegacyControllerContextBuilder {
    /// Create a builder from its collaborators and configuration.
    #[must_use]
    pub const fn new(env: ContextEnvironment, config: LegacyContextConfig) -> Self {
        Self { env, config }
    }

    /// Configuration the builder was created with.
    #[must_use]
    pub const fn config(&self) -> &LegacyContextConfig {
        &self.config
    }

    /// Build the context and register it with `state`.
    ///
    /// # Errors
    ///
    /// See [`Self::build`]. Nothing is registered on failure.
    pub async fn build_legacy_context<R, S>(&self, request: &R, state: &mut S) -> Result<()>
    where
        R: RequestSource + Sync + ?Sized,
        S: ContextStateManager + ?Sized,
    {
        let controller = self.build(request).await?;
        state.set_controller(controller);
        Ok(())
    }

    /// Build the context of `request`.
    ///
    /// # Errors
    ///
    /// - [`ContextError::TabRegistry`](crate::ContextError::TabRegistry) when
    ///   the tab registry fails for a reason other than "not found"
    /// - [`ContextError::Translation`](crate::ContextError::Translation) when
    ///   a notification message cannot be translated
    pub async fn build<R>(&self, request: &R) -> Result<ControllerContext>
    where
        R: RequestSource + Sync + ?Sized,
    {
        let controller_name = controller_name(request);
        let multishop_context = multishop_scope(
            &controller_name,
            &self.config.controllers_locked_to_all_shop_context,
        );
        let id = resolve_tab_id(self.env.tabs.as_ref(), &controller_name).await?;
        let token = self.env.employee.employee_id().and_then(|employee_id| {
            self.env
                .tokens
                .admin_token(&format!("{controller_name}{id}{employee_id}"))
        });
        let conf = conf_messages(self.env.translator.as_ref())?;
        let error = error_messages(self.env.translator.as_ref(), &self.env.shop.name())?;
        let shop_link_type = shop_link_type(&controller_name, self.env.multistore.is_active());
        let override_folder = override_folder(&controller_name);
        let admin_webpath = admin_web_path(&self.config.core_dir, self.config.admin_dir.as_deref());
        let class_name = class_name_for(&controller_name);

        tracing::debug!(
            controller = %controller_name,
            class_name = ?class_name,
            tab_id = id,
            multishop_context = multishop_context.bits(),
            shop_link_type = ?shop_link_type,
            "Legacy controller context built"
        );

        Ok(ControllerContext {
            php_self: controller_name.clone(),
            controller_name,
            kind: ControllerKind::Admin,
            class_name,
            id,
            token,
            multishop_context,
            shop_link_type,
            conf,
            error,
            tpl_folder: override_folder.clone(),
            override_folder,
            admin_webpath,
        })
    }
}

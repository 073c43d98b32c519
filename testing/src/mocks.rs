//! In-memory collaborators for context builder tests.
//!
//! Every mock is deterministic and cheap to clone:
//! - [`InMemoryTabRepository`]: HashMap-backed tab registry with a failure switch
//! - [`EchoTranslator`]: returns message ids with their parameters substituted
//! - [`FixedEmployee`] / [`FixedShop`]: constant session values
//! - [`RecordingStateManager`]: keeps every registered controller
//! - [`IdentityMediaResolver`]: serves asset URIs unchanged

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on poisoned locks

use backoffice_core::{
    ContextStateManager, ControllerContext, EmployeeContext, MediaResolver, ShopContext,
    TabLookupError, TabRepository, TranslationError, Translator,
};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory tab registry.
///
/// # Example
///
/// ```
/// use backoffice_testing::InMemoryTabRepository;
///
/// let tabs = InMemoryTabRepository::new().with_tab("AdminCartsController", 10);
/// assert_eq!(tabs.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryTabRepository {
    tabs: Arc<RwLock<HashMap<String, i32>>>,
    failure: Arc<RwLock<Option<String>>>,
    lookups: Arc<AtomicUsize>,
}

impl InMemoryTabRepository {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tab (builder style).
    #[must_use]
    pub fn with_tab(self, class_name: &str, id: i32) -> Self {
        self.insert(class_name, id);
        self
    }

    /// Register a tab.
    pub fn insert(&self, class_name: &str, id: i32) {
        self.tabs
            .write()
            .unwrap()
            .insert(class_name.to_string(), id);
    }

    /// Make every following lookup fail with a backend error.
    pub fn fail_with(&self, reason: &str) {
        *self.failure.write().unwrap() = Some(reason.to_string());
    }

    /// Clear a failure set with [`Self::fail_with`].
    pub fn recover(&self) {
        *self.failure.write().unwrap() = None;
    }

    /// Number of registered tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.read().unwrap().len()
    }

    /// Check if no tab is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.read().unwrap().is_empty()
    }

    /// Number of lookups served so far, failed ones included.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn lookup(&self, class_name: &str) -> Result<i32, TabLookupError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = self.failure.read().unwrap().clone() {
            return Err(TabLookupError::Backend(reason));
        }

        self.tabs
            .read()
            .unwrap()
            .get(class_name)
            .copied()
            .ok_or_else(|| TabLookupError::NotFound {
                class_name: class_name.to_string(),
            })
    }
}

impl TabRepository for InMemoryTabRepository {
    fn id_by_class_name<'a>(
        &'a self,
        class_name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<i32, TabLookupError>> + Send + 'a>> {
        let result = self.lookup(class_name);
        Box::pin(async move { result })
    }
}

/// Translator returning the message id with its parameters substituted.
#[derive(Clone, Debug, Default)]
pub struct EchoTranslator {
    failing: Arc<AtomicBool>,
}

impl EchoTranslator {
    /// Create a working translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator whose catalogue cannot be read.
    #[must_use]
    pub fn failing() -> Self {
        let translator = Self::new();
        translator.set_failing(true);
        translator
    }

    /// Switch failures on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Translator for EchoTranslator {
    fn trans(
        &self,
        id: &str,
        parameters: &[(&str, &str)],
        domain: &str,
    ) -> Result<String, TranslationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TranslationError {
                id: id.to_string(),
                domain: domain.to_string(),
                reason: "catalogue unavailable".to_string(),
            });
        }

        Ok(parameters
            .iter()
            .fold(id.to_string(), |message, (placeholder, value)| {
                message.replace(placeholder, value)
            }))
    }
}

/// Employee with a fixed id, or none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedEmployee(pub Option<u32>);

impl FixedEmployee {
    /// A logged-in employee.
    #[must_use]
    pub const fn logged_in(id: u32) -> Self {
        Self(Some(id))
    }

    /// No employee.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl EmployeeContext for FixedEmployee {
    fn employee_id(&self) -> Option<u32> {
        self.0
    }
}

/// Shop with a fixed name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedShop(pub String);

impl FixedShop {
    /// Create a shop named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl ShopContext for FixedShop {
    fn name(&self) -> String {
        self.0.clone()
    }
}

/// State manager keeping every registered controller.
#[derive(Clone, Debug, Default)]
pub struct RecordingStateManager {
    controllers: Vec<ControllerContext>,
}

impl RecordingStateManager {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered controllers in order.
    #[must_use]
    pub fn controllers(&self) -> &[ControllerContext] {
        &self.controllers
    }

    /// The last registered controller.
    #[must_use]
    pub fn last(&self) -> Option<&ControllerContext> {
        self.controllers.last()
    }
}

impl ContextStateManager for RecordingStateManager {
    fn set_controller(&mut self, controller: ControllerContext) {
        self.controllers.push(controller);
    }
}

/// Media resolver serving every URI unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityMediaResolver;

impl MediaResolver for IdentityMediaResolver {
    fn css_path(&self, file: &str, _media: &str) -> Option<String> {
        Some(file.to_string())
    }

    fn js_path(&self, file: &str) -> Option<String> {
        Some(file.to_string())
    }
}

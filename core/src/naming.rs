//! Controller naming rules: entity class mapping and template folders.

use crate::constants::CONTROLLER_PREFIX_LEN;
use crate::inflector::singularize;
use regex::Regex;
use std::sync::LazyLock;

/// Controllers whose entity class does not follow the `Admin<Plural>Controller` convention.
pub const CLASS_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("AdminAccessController", "Profile"),
    ("AdminCarrierWizardController", "Carrier"),
    ("AdminImagesController", "ImageType"),
    ("AdminReturnController", "OrderReturn"),
    ("AdminSearchConfController", "Alias"),
    ("AdminConfigureFaviconBoController", "Configuration"),
];

#[allow(clippy::expect_used)] // Patterns are compile-time literals
static CONTROLLER_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("Admin([a-zA-Z]+)Controller").expect("controller pattern is valid")
});

#[allow(clippy::expect_used)] // Patterns are compile-time literals
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([A-Z][a-z])").expect("word start pattern is valid"));

/// Map a controller name to the entity class it manages.
///
/// The override table is checked first. Otherwise the noun phrase between
/// `Admin` and `Controller` is singularized. Names that do not contain that
/// pattern have no class.
///
/// # Examples
///
/// ```
/// use backoffice_core::naming::class_name_for;
///
/// assert_eq!(class_name_for("AdminCarrierWizardController").as_deref(), Some("Carrier"));
/// assert_eq!(class_name_for("AdminCartsController").as_deref(), Some("Cart"));
/// assert_eq!(class_name_for("DashboardPage"), None);
/// ```
#[must_use]
pub fn class_name_for(controller: &str) -> Option<String> {
    if let Some((_, class_name)) = CLASS_NAME_OVERRIDES
        .iter()
        .find(|(name, _)| *name == controller)
    {
        return Some((*class_name).to_string());
    }

    let noun = CONTROLLER_NOUN.captures(controller)?.get(1)?.as_str();
    Some(singularize(noun))
}

/// Convert a `CamelCase` name to `snake_case`.
///
/// An underscore is inserted before every uppercase letter followed by a
/// lowercase one; leading and trailing underscores are trimmed and the
/// result lowercased. Runs of capitals stay glued to the next word
/// (`PDFInvoice` → `pdf_invoice`).
#[must_use]
pub fn to_underscore_case(name: &str) -> String {
    WORD_START
        .replace_all(name, "_${1}")
        .trim_matches('_')
        .to_lowercase()
}

/// Folder holding a controller's template overrides.
///
/// The `Admin` prefix is dropped, the rest underscore-cased and suffixed
/// with `/`: `AdminCartsController` → `carts_controller/`.
#[must_use]
pub fn override_folder(controller: &str) -> String {
    let without_prefix = controller.get(CONTROLLER_PREFIX_LEN..).unwrap_or_default();
    format!("{}/", to_underscore_case(without_prefix))
}

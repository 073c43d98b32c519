//! Notification message tables.
//!
//! Legacy controllers redirect with `conf=<code>` or `error=<code>` and the
//! page looks the message up in these tables. The builder translates every
//! entry up front so the rendering layer never needs the translator.

use crate::context::MessageTable;
use crate::error::TranslationError;
use crate::providers::Translator;

const SUCCESS: &str = "Admin.Notifications.Success";
const MODULES: &str = "Admin.Modules.Notification";
const ORDERS_CUSTOMERS: &str = "Admin.Orderscustomers.Notification";
const INTERNATIONAL: &str = "Admin.International.Notification";
const CATALOG: &str = "Admin.Catalog.Notification";

/// Success messages: `(code, message id, translation domain)`.
pub const CONF_MESSAGES: &[(u32, &str, &str)] = &[
    (1, "Successful deletion", SUCCESS),
    (2, "The selection has been successfully deleted.", SUCCESS),
    (3, "Successful creation", SUCCESS),
    (4, "Successful update", SUCCESS),
    (5, "The status has been successfully updated.", SUCCESS),
    (6, "The settings have been successfully updated.", SUCCESS),
    (7, "Image successfully deleted.", SUCCESS),
    (8, "The module was successfully downloaded.", MODULES),
    (9, "The thumbnails were successfully regenerated.", SUCCESS),
    (10, "The message was successfully sent to the customer.", ORDERS_CUSTOMERS),
    (11, "Comment successfully added.", SUCCESS),
    (12, "Module(s) installed successfully.", MODULES),
    (13, "Module(s) uninstalled successfully.", MODULES),
    (14, "The translation was successfully copied.", INTERNATIONAL),
    (15, "The translations have been successfully added.", INTERNATIONAL),
    (16, "The module transplanted successfully to the hook.", MODULES),
    (17, "The module was successfully removed from the hook.", MODULES),
    (18, "Successful upload.", SUCCESS),
    (19, "Duplication was completed successfully.", SUCCESS),
    (
        20,
        "The translation was added successfully, but the language has not been created.",
        INTERNATIONAL,
    ),
    (21, "Module reset successfully.", MODULES),
    (22, "Module deleted successfully.", MODULES),
    (23, "Localization pack imported successfully.", INTERNATIONAL),
    (24, "Localization pack imported successfully.", INTERNATIONAL),
    (25, "The selected images have successfully been moved.", SUCCESS),
    (26, "Your cover image selection has been saved.", SUCCESS),
    (27, "The image's shop association has been modified.", SUCCESS),
    (28, "A zone has been assigned to the selection successfully.", SUCCESS),
    (29, "Successful upgrade.", SUCCESS),
    (30, "A partial refund was successfully created.", ORDERS_CUSTOMERS),
    (31, "The discount was successfully generated.", CATALOG),
    (32, "Successfully signed in to PrestaShop Addons.", MODULES),
];

/// Code of the "root category not associated" error.
pub const ROOT_CATEGORY_ERROR: u32 = 1;

/// Placeholder replaced by the current shop's name.
pub const SHOP_PLACEHOLDER: &str = "%shop%";

const ROOT_CATEGORY_MESSAGE: &str = "The root category of the shop %shop% is not associated with the current shop. You can't access this page. Please change the root category of the shop.";

/// Translate the success message table.
///
/// # Errors
///
/// Returns the first [`TranslationError`] raised by the translator.
pub fn conf_messages(translator: &dyn Translator) -> Result<MessageTable, TranslationError> {
    CONF_MESSAGES
        .iter()
        .map(|(code, id, domain)| {
            translator
                .trans(id, &[], domain)
                .map(|message| (*code, message))
        })
        .collect()
}

/// Translate the error message table for the shop named `shop_name`.
///
/// # Errors
///
/// Returns the [`TranslationError`] raised by the translator.
pub fn error_messages(
    translator: &dyn Translator,
    shop_name: &str,
) -> Result<MessageTable, TranslationError> {
    let root_category =
        translator.trans(ROOT_CATEGORY_MESSAGE, &[(SHOP_PLACEHOLDER, shop_name)], CATALOG)?;

    Ok(MessageTable::from([(ROOT_CATEGORY_ERROR, root_category)]))
}

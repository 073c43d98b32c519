//! Admin web path derivation.

use regex::Regex;
use std::path::MAIN_SEPARATOR;

/// Admin directory relative to the installation root.
///
/// Every case-insensitive occurrence of `core_dir` is removed from
/// `admin_dir`, then a single leading path separator is stripped. Without an
/// admin directory there is no web path.
///
/// # Examples
///
/// ```
/// use backoffice_core::paths::admin_web_path;
///
/// let web_path = admin_web_path("/var/www/shop", Some("/var/www/shop/admin-dev"));
/// assert_eq!(web_path.as_deref(), Some("admin-dev"));
/// assert_eq!(admin_web_path("/var/www/shop", None), None);
/// ```
#[must_use]
pub fn admin_web_path(core_dir: &str, admin_dir: Option<&str>) -> Option<String> {
    let admin_dir = admin_dir?;

    let relative = if core_dir.is_empty() {
        admin_dir.to_string()
    } else {
        match Regex::new(&format!("(?i){}", regex::escape(core_dir))) {
            Ok(core) => core.replace_all(admin_dir, "").into_owned(),
            Err(err) => {
                tracing::warn!(error = %err, core_dir, "Core directory cannot be matched, keeping admin path");
                admin_dir.to_string()
            }
        }
    };

    Some(
        relative
            .strip_prefix(MAIN_SEPARATOR)
            .map_or_else(|| relative.clone(), str::to_string),
    )
}

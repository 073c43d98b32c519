//! Media path resolution trait.

/// Resolves asset URIs to the paths served to the browser.
pub trait MediaResolver: Send + Sync {
    /// Public path of a stylesheet, `None` if it cannot be served.
    fn css_path(&self, file: &str, media: &str) -> Option<String>;

    /// Public path of a script, `None` if it cannot be served.
    fn js_path(&self, file: &str) -> Option<String>;
}

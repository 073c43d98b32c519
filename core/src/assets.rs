//! Page assets collected while a legacy page renders.
//!
//! Rendering collaborators append stylesheets and scripts after the
//! controller context is built. Both lists keep insertion order and ignore
//! files that are already registered.

use crate::providers::MediaResolver;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// Stylesheets and scripts of the page being rendered.
#[derive(Clone, Serialize)]
pub struct PageAssets {
    /// Stylesheet path → media type.
    css_files: IndexMap<String, String>,
    /// Script paths, with their `?version` suffix when one was given.
    js_files: Vec<String>,
    #[serde(skip)]
    resolver: Arc<dyn MediaResolver>,
}

impl PageAssets {
    /// Create empty asset lists resolving paths through `resolver`.
    #[must_use]
    pub fn new(resolver: Arc<dyn MediaResolver>) -> Self {
        Self {
            css_files: IndexMap::new(),
            js_files: Vec::new(),
            resolver,
        }
    }

    /// Registered stylesheets in order.
    #[must_use]
    pub const fn css_files(&self) -> &IndexMap<String, String> {
        &self.css_files
    }

    /// Registered scripts in order.
    #[must_use]
    pub fn js_files(&self) -> &[String] {
        &self.js_files
    }

    /// Register a stylesheet.
    ///
    /// With `check_path` the URI goes through the [`MediaResolver`] and is
    /// dropped when it cannot be resolved. A file already registered with
    /// the same media is ignored; with another media only its media type is
    /// updated, in place. New files are inserted at `offset`, or appended
    /// when `offset` is `None` or past the end.
    pub fn add_css(&mut self, uri: &str, media: &str, offset: Option<usize>, check_path: bool) {
        let path = if check_path {
            self.resolver.css_path(uri, media)
        } else {
            Some(uri.to_string())
        };
        let Some(path) = path.filter(|path| !path.is_empty()) else {
            tracing::debug!(uri, "Stylesheet cannot be resolved, skipping");
            return;
        };

        if let Some(existing) = self.css_files.get_mut(&path) {
            if existing != media {
                *existing = media.to_string();
            }
            return;
        }

        let len = self.css_files.len();
        let index = offset.filter(|offset| *offset <= len).unwrap_or(len);
        self.css_files.shift_insert(index, path, media.to_string());
    }

    /// Register a script.
    ///
    /// A `?version` suffix is kept on the stored entry but ignored when
    /// checking for duplicates.
    pub fn add_js(&mut self, uri: &str, check_path: bool) {
        let (file, version) = match uri.split_once('?') {
            Some((file, version)) => (file, version),
            None => (uri, ""),
        };

        let path = if check_path {
            self.resolver.js_path(file)
        } else {
            Some(file.to_string())
        };
        let Some(path) = path.filter(|path| !path.is_empty()) else {
            tracing::debug!(uri, "Script cannot be resolved, skipping");
            return;
        };

        if self.contains_js(&path) {
            return;
        }

        if version.is_empty() {
            self.js_files.push(path);
        } else {
            self.js_files.push(format!("{path}?{version}"));
        }
    }

    fn contains_js(&self, path: &str) -> bool {
        self.js_files.iter().any(|registered| {
            registered
                .split_once('?')
                .map_or(registered.as_str(), |(file, _)| file)
                == path
        })
    }
}

impl std::fmt::Debug for PageAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageAssets")
            .field("css_files", &self.css_files)
            .field("js_files", &self.js_files)
            .finish_non_exhaustive()
    }
}

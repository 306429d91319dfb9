//! API endpoint configuration shared by the host shell and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host binary reads `API_BASE_URL` from its environment and renders it into
//! the SSR shell as a `<meta>` tag. The hydrated client reads the tag back, so
//! no page or component ever names a backend host directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when neither the environment nor the document provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Name of the `<meta>` tag carrying the API base URL into the browser.
pub const API_BASE_URL_META: &str = "api-base-url";

/// Location of the backend REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config from a raw base URL. Trailing slashes are dropped and a
    /// blank value falls back to [`DEFAULT_API_BASE_URL`].
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Base URL that API paths (`/images`, `/users/...`) are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host root that serves static uploads: the base URL minus a trailing
    /// `/api` segment.
    pub fn asset_root(&self) -> &str {
        self.base_url.strip_suffix("/api").unwrap_or(&self.base_url)
    }

    /// Public URL of an uploaded image file.
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/uploads/{filename}", self.asset_root())
    }

    /// Read the config embedded in the current document by the SSR shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{API_BASE_URL_META}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"));
        match content {
            Some(raw) => Self::new(&raw),
            None => {
                leptos::logging::warn!("no {API_BASE_URL_META} meta tag; using {DEFAULT_API_BASE_URL}");
                Self::default()
            }
        }
    }
}

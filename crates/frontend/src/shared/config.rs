//! Page configuration.
//!
//! The server renders the host page and passes settings as `data-*`
//! attributes on `<body>`:
//!
//! ```html
//! <body data-original-nickname="alice"
//!       data-info-color="#17a2b8"
//!       data-warn-color="#ffc107"
//!       data-error-color="#dc3545">
//! ```
//!
//! Missing or blank attributes fall back to the defaults below.

use leptos::prelude::*;
use web_sys::window;

use super::api_utils::api_base;
use super::message_log::Severity;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_INFO_COLOR: &str = "#17a2b8";
pub const DEFAULT_WARN_COLOR: &str = "#ffc107";
pub const DEFAULT_ERROR_COLOR: &str = "#dc3545";

/// Border colors of the nickname input, one per outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusColors {
    pub info: String,
    pub warn: String,
    pub error: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            info: DEFAULT_INFO_COLOR.to_string(),
            warn: DEFAULT_WARN_COLOR.to_string(),
            error: DEFAULT_ERROR_COLOR.to_string(),
        }
    }
}

impl StatusColors {
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warn,
            Severity::Error => &self.error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Origin the API lives on; empty means relative URLs
    pub api_base: String,
    pub csrf_cookie_name: String,
    pub original_nickname: String,
    pub colors: StatusColors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            original_nickname: String::new(),
            colors: StatusColors::default(),
        }
    }
}

impl PageConfig {
    /// Build from a dataset lookup (keys are camelCase, as in `HTMLElement.dataset`)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_base: get("apiBase").unwrap_or(defaults.api_base),
            csrf_cookie_name: get("csrfCookie").unwrap_or(defaults.csrf_cookie_name),
            // the nickname is user content, blank is a legal value
            original_nickname: lookup("originalNickname").unwrap_or_default(),
            colors: StatusColors {
                info: get("infoColor").unwrap_or(defaults.colors.info),
                warn: get("warnColor").unwrap_or(defaults.colors.warn),
                error: get("errorColor").unwrap_or(defaults.colors.error),
            },
        }
    }

    /// Read the configuration from `<body data-*>` of the current document
    pub fn from_document() -> Self {
        let dataset = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.dataset());

        let mut config = Self::from_lookup(|key| dataset.as_ref().and_then(|ds| ds.get(key)));
        if config.api_base.is_empty() {
            config.api_base = api_base();
        }
        config
    }
}

/// Provide the page configuration to the component tree
pub fn provide_page_config(config: PageConfig) {
    log::debug!(
        "page config: api_base='{}', csrf cookie='{}'",
        config.api_base,
        config.csrf_cookie_name
    );
    provide_context(config);
}

/// Hook to read the page configuration; reads the document if nothing was provided
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_else(PageConfig::from_document)
}

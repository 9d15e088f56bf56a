//! API utilities for frontend-backend communication
//!
//! The chat backend serves the page itself, so requests go to the same
//! origin the page was loaded from.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "https://example.com"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base URL and an API path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("https://example.com/", "/api/username-chat/");
/// assert_eq!(url, "https://example.com/api/username-chat/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

//! CSRF token lookup.
//!
//! The server sets the token in a cookie; mutating requests echo it back
//! as the `csrfmiddlewaretoken` form field.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Find a cookie value in a `document.cookie` string.
///
/// Values are percent-decoded; a value that fails to decode is returned as-is.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Read a cookie of the current document
pub fn get_cookie(name: &str) -> Option<String> {
    let document: HtmlDocument = window()?.document()?.dyn_into().ok()?;
    let cookies = document.cookie().ok()?;
    find_cookie(&cookies, name)
}

use contracts::system::username_chat::{
    ApiResponse, UpdateResult, UsernameChatRequest, USERNAME_CHAT_PATH,
};
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;
use crate::shared::config::PageConfig;
use crate::shared::csrf::get_cookie;

/// Failure to get a usable response out of the server.
///
/// The message is what ends up in the error log entry.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Encode(String),

    #[error("{0}")]
    Network(String),

    #[error("{status_text}")]
    Http { status: u16, status_text: String },

    #[error("{0}")]
    Parse(String),
}

impl TransportError {
    /// Short label shown as the error headline
    pub fn status_label(&self) -> &'static str {
        match self {
            TransportError::Parse(_) => "parsererror",
            _ => "error",
        }
    }

    pub fn http(status: u16, status_text: String) -> Self {
        let status_text = if status_text.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            status_text
        };
        TransportError::Http {
            status,
            status_text,
        }
    }
}

impl From<TransportError> for UpdateResult {
    fn from(error: TransportError) -> Self {
        UpdateResult::transport_failure(error.status_label(), error.to_string())
    }
}

/// Form-encoded body of the update request
pub fn encode_request(csrf_token: &str, candidate: &str) -> Result<String, TransportError> {
    let request = UsernameChatRequest {
        csrfmiddlewaretoken: csrf_token.to_string(),
        username: candidate.to_string(),
    };
    serde_qs::to_string(&request).map_err(|e| TransportError::Encode(e.to_string()))
}

/// Post the nickname and parse the JSON answer
pub async fn post_username(
    config: &PageConfig,
    candidate: &str,
) -> Result<ApiResponse, TransportError> {
    let csrf_token = get_cookie(&config.csrf_cookie_name).unwrap_or_else(|| {
        log::warn!("cookie '{}' not found, sending empty CSRF token", config.csrf_cookie_name);
        String::new()
    });
    let body = encode_request(&csrf_token, candidate)?;

    let response = Request::post(&api_url(&config.api_base, USERNAME_CHAT_PATH))
        .header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        )
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .body(body)
        .map_err(|e| TransportError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(TransportError::http(
            response.status(),
            response.status_text(),
        ));
    }

    response
        .json::<ApiResponse>()
        .await
        .map_err(|e| TransportError::Parse(e.to_string()))
}

/// Submit a nickname candidate; never fails, transport errors become error results
pub async fn submit_nickname(config: &PageConfig, candidate: &str) -> UpdateResult {
    match post_username(config, candidate).await {
        Ok(response) => {
            log::debug!(
                "username-chat: {} '{}'",
                response.status.as_str(),
                response.kind
            );
            response.into()
        }
        Err(e) => {
            log::warn!("username-chat request failed ({}): {}", e.status_label(), e);
            e.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::username_chat::ApiStatus;

    #[test]
    fn test_encode_request() {
        let body = encode_request("tok", "foo").unwrap();
        assert_eq!(body, "csrfmiddlewaretoken=tok&username=foo");
    }

    #[test]
    fn test_encode_empty_candidate() {
        let body = encode_request("tok", "").unwrap();
        assert_eq!(body, "csrfmiddlewaretoken=tok&username=");
    }

    #[test]
    fn test_encode_escapes_candidate() {
        let body = encode_request("tok", "a&b=c").unwrap();
        assert!(body.starts_with("csrfmiddlewaretoken=tok&username="));
        assert!(!body.ends_with("a&b=c"));
    }

    #[test]
    fn test_http_error_result() {
        let result: UpdateResult = TransportError::http(500, "Internal Server Error".into()).into();
        assert_eq!(result.status(), ApiStatus::Error);
        assert_eq!(result.payload().date, "now");
        assert_eq!(result.payload().kind, "error");
        assert_eq!(result.payload().text, "Internal Server Error");
    }

    #[test]
    fn test_http_error_without_reason() {
        let error = TransportError::http(502, String::new());
        assert_eq!(error.to_string(), "HTTP 502");
    }

    #[test]
    fn test_parse_error_label() {
        let result: UpdateResult = TransportError::Parse("expected value".into()).into();
        assert_eq!(result.payload().kind, "parsererror");
        assert_eq!(result.payload().text, "expected value");
    }
}

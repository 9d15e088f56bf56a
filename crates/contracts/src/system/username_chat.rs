use serde::{Deserialize, Serialize};

/// Endpoint that changes the chat nickname of the signed-in user
pub const USERNAME_CHAT_PATH: &str = "/api/username-chat/";

/// Date reported for results the client had to synthesize itself
pub const TRANSPORT_FAILURE_DATE: &str = "now";

/// Form body of `POST /api/username-chat/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameChatRequest {
    pub csrfmiddlewaretoken: String,
    pub username: String,
}

/// Outcome reported by the server.
///
/// Anything other than `success` or `warning` counts as an error, so an
/// unexpected value never reaches the success path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStatus {
    Success,
    Warning,
    #[default]
    Error,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Success => "success",
            ApiStatus::Warning => "warning",
            ApiStatus::Error => "error",
        }
    }
}

impl From<String> for ApiStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => ApiStatus::Success,
            "warning" => ApiStatus::Warning,
            _ => ApiStatus::Error,
        }
    }
}

impl From<ApiStatus> for String {
    fn from(value: ApiStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Raw JSON response: `{date, status, type, text}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: ApiStatus,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePayload {
    pub date: String,
    /// Short headline shown next to the input (`type` on the wire)
    pub kind: String,
    pub text: String,
}

/// Result of a nickname update, one variant per status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    Success(UpdatePayload),
    Warning(UpdatePayload),
    Error(UpdatePayload),
}

impl UpdateResult {
    /// Error result for a request that never produced a usable response
    pub fn transport_failure(status: impl Into<String>, error: impl Into<String>) -> Self {
        UpdateResult::Error(UpdatePayload {
            date: TRANSPORT_FAILURE_DATE.to_string(),
            kind: status.into(),
            text: error.into(),
        })
    }

    pub fn status(&self) -> ApiStatus {
        match self {
            UpdateResult::Success(_) => ApiStatus::Success,
            UpdateResult::Warning(_) => ApiStatus::Warning,
            UpdateResult::Error(_) => ApiStatus::Error,
        }
    }

    pub fn payload(&self) -> &UpdatePayload {
        match self {
            UpdateResult::Success(p) | UpdateResult::Warning(p) | UpdateResult::Error(p) => p,
        }
    }
}

impl From<ApiResponse> for UpdateResult {
    fn from(response: ApiResponse) -> Self {
        let payload = UpdatePayload {
            date: response.date,
            kind: response.kind,
            text: response.text,
        };
        match response.status {
            ApiStatus::Success => UpdateResult::Success(payload),
            ApiStatus::Warning => UpdateResult::Warning(payload),
            ApiStatus::Error => UpdateResult::Error(payload),
        }
    }
}

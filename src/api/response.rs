use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Shown when the server fails without saying why
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong! Try again later.";

/// Errors that can occur while talking to the API
///
/// Display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Authentication required: set api.token or GUARDSEARCH_TOKEN")]
    Unauthenticated,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    /// Server answered with an error; `message` comes from the body
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Parse(String),
}

/// Uniform result of an API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// Collapse into a `Result`, enforcing the one-of shape
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(ApiError::Parse("response carried neither data nor error".into())),
        }
    }
}

/// Decode a 2xx body: either the bare payload or a `{data}` / `{error}` envelope
pub(crate) fn decode_success<T: DeserializeOwned>(body: &str) -> ApiResponse<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return ApiResponse::err(ApiError::Parse(e.to_string())),
    };

    if let Value::Object(map) = &value {
        if let Some(message) = map.get("error").and_then(error_text) {
            return ApiResponse::err(ApiError::Server {
                status: 200,
                message,
            });
        }
        if let Some(data) = map.get("data") {
            return decode_value(data.clone());
        }
    }

    decode_value(value)
}

/// Build the error for a non-2xx response
pub(crate) fn decode_failure(status: u16, body: &str) -> ApiError {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .and_then(error_text)
            .or_else(|| v.get("message").and_then(error_text))
    });

    let message = from_json.unwrap_or_else(|| {
        let text = body.trim();
        if text.is_empty() || text.starts_with('{') || text.starts_with('<') {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            first_line(text)
        }
    });

    ApiError::Server { status, message }
}

fn decode_value<T: DeserializeOwned>(value: Value) -> ApiResponse<T> {
    match serde_json::from_value(value) {
        Ok(data) => ApiResponse::ok(data),
        Err(e) => ApiResponse::err(ApiError::Parse(e.to_string())),
    }
}

// Errors are sometimes a string, sometimes `{ "message": ... }`
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(first_line(s)),
        Value::Object(map) => map.get("message").and_then(error_text),
        _ => None,
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod response_tests;

//! reqwest-backed client shared by every API call

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::response::{ApiError, ApiResponse, decode_failure, decode_success};
use crate::config::ApiConfig;

/// Description of a single GET request
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub path: String,
    pub params: Vec<(String, String)>,
    pub require_auth: bool,
}

impl RequestSpec {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            require_auth: false,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn require_auth(mut self) -> Self {
        self.require_auth = true;
        self
    }
}

/// HTTP client for the dashboard API
#[derive(Debug, Clone)]
pub struct GenericClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GenericClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config
                .token
                .as_ref()
                .filter(|t| !t.trim().is_empty())
                .cloned(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Perform a request and decode the JSON payload
    ///
    /// Never fails outright: transport, status and decoding problems all end
    /// up in `ApiResponse::error`.
    pub async fn request<T: DeserializeOwned>(&self, spec: RequestSpec) -> ApiResponse<T> {
        let mut builder = self
            .http
            .get(self.url_for(&spec.path))
            .query(&spec.params);

        if spec.require_auth {
            match &self.token {
                Some(token) => builder = builder.bearer_auth(token),
                None => return ApiResponse::err(ApiError::Unauthenticated),
            }
        }

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => return ApiResponse::err(transport_error(e)),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => return ApiResponse::err(transport_error(e)),
        };

        if status.is_success() {
            decode_success(&body)
        } else {
            log::debug!("GET {} -> {}", spec.path, status);
            ApiResponse::err(decode_failure(status.as_u16(), &body))
        }
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_decode() {
        ApiError::Parse(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

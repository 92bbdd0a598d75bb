//! Source of suggestions for the search worker

use std::future::Future;

use super::suggestion::Suggestion;
use crate::api::{ApiError, GenericClient, RequestSpec};
use crate::config::ApiConfig;

/// Anything that can answer a type-ahead query
pub trait SearchBackend: Send + Sync + 'static {
    fn search(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, ApiError>> + Send;
}

/// Searches guards through the dashboard API
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: GenericClient,
    search_path: String,
}

impl HttpSearchBackend {
    pub fn new(client: GenericClient, search_path: impl Into<String>) -> Self {
        Self {
            client,
            search_path: search_path.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = GenericClient::new(config)?;
        Ok(Self::new(client, config.search_path.clone()))
    }
}

impl SearchBackend for HttpSearchBackend {
    fn search(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, ApiError>> + Send {
        let spec = RequestSpec::get(self.search_path.as_str())
            .param("text", text)
            .require_auth();

        async move {
            self.client
                .request::<Vec<Suggestion>>(spec)
                .await
                .into_result()
        }
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;

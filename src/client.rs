//! Azure OpenAI chat client: one JSON POST per call.
//!
//! The call either completes or fails exactly once — no retry, no timeout,
//! no cancellation. Callers needing bounded latency wrap the future
//! externally. The client is `Clone` and safe to share across tasks; each
//! call builds its own URL and owns its own in-flight request.

use crate::config::{AzureCredentials, mask_key};
use crate::endpoint::chat_completion_endpoint;
use crate::error::AzureError;
use std::collections::HashMap;

#[derive(Clone)]
pub struct AzureChatClient {
    credentials: AzureCredentials,
    http_client: reqwest::Client,
    base_url: Option<String>,
}

impl std::fmt::Debug for AzureChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureChatClient")
            .field("api_key", &mask_key(self.credentials.api_key()))
            .field("instance_name", &self.credentials.instance_name)
            .field("deployment_name", &self.credentials.deployment_name)
            .field("api_version", &self.credentials.api_version)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AzureChatClient {
    /// Create a client, validating the credentials eagerly.
    pub fn new(credentials: AzureCredentials) -> Result<Self, AzureError> {
        Self::with_http_client(credentials, reqwest::Client::new())
    }

    /// Create a client that reuses a caller-supplied `reqwest::Client`.
    pub fn with_http_client(
        credentials: AzureCredentials,
        http_client: reqwest::Client,
    ) -> Result<Self, AzureError> {
        credentials.validate()?;
        Ok(Self {
            credentials,
            http_client,
            base_url: None,
        })
    }

    /// Build a client from the `AZURE_*` environment variables.
    pub fn from_env() -> Result<Self, AzureError> {
        Self::new(AzureCredentials::from_env()?)
    }

    /// Replace the derived
    /// `https://{instance}.openai.azure.com/openai/deployments/{deployment}`
    /// prefix. The chat-completions path and `api-version` query are still
    /// appended.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    fn endpoint(&self) -> Result<String, AzureError> {
        match &self.base_url {
            Some(base) => Ok(format!(
                "{base}/chat/completions?api-version={}",
                self.credentials.api_version
            )),
            None => chat_completion_endpoint(&self.credentials),
        }
    }

    /// Send one chat-completion payload and return the decoded response body.
    ///
    /// The payload is forwarded verbatim; its shape is not inspected or
    /// validated. On a non-2xx response the error carries the status, body
    /// text and headers; on a transport failure it carries only the failure
    /// description.
    pub async fn send_chat_message<T>(&self, message: &T) -> Result<serde_json::Value, AzureError>
    where
        T: serde::Serialize + ?Sized,
    {
        let url = self.endpoint()?;

        let response = self
            .http_client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(self.credentials.api_key())
            .json(message)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "no response received from Azure OpenAI");
                AzureError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let headers = header_strings(response.headers());
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "Azure OpenAI returned an error response"
            );
            return Err(AzureError::http_status(
                status.as_u16(),
                body,
                headers,
                format!("Azure OpenAI request failed with status {status}"),
            ));
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to decode Azure OpenAI response body");
            AzureError::transport(format!("failed to decode response body: {e}"))
        })
    }
}

fn header_strings(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

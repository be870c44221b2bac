//! HTTP client for the Triple Whale Moby endpoint.
//!
//! Moby is Triple Whale's conversational analytics agent. The client posts a
//! free-form question together with the shop identifier and returns whatever
//! JSON document the endpoint sends back, without imposing a schema on it.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use super::MobyError;
use crate::core::Config;

/// Marker identifying this integration to the Triple Whale backend.
const REQUEST_SOURCE: &str = "orcabase";

/// The response payload from Moby.
///
/// The endpoint's answer shape varies per question (free-form agent output
/// with nested responses and an optional conclusion), so it is kept as
/// untyped JSON and passed through to the caller verbatim.
pub type MobyResponse = Value;

/// Request body for a Moby chat question.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    source: &'a str,
    question: &'a str,
    shop_id: &'a str,
}

/// Client for the Moby chat endpoint.
pub struct MobyClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for MobyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobyClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl MobyClient {
    /// Create a new client for the given endpoint and API key.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from the server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.remote.api_url, &config.credentials.api_key)
    }

    /// Ask Moby a question about the given shop.
    ///
    /// Sends `{"source": "orcabase", "question": ..., "shopId": ...}` to the
    /// chat endpoint with the API key in the `x-api-key` header. Non-success
    /// statuses are turned into [`MobyError::Status`] with the response body
    /// attached for diagnosis.
    pub async fn ask(&self, question: &str, shop_id: &str) -> Result<MobyResponse, MobyError> {
        info!(shop_id, "Sending question to Moby");
        debug!(question, "Moby request payload");

        let request = ChatRequest {
            source: REQUEST_SOURCE,
            question,
            shop_id,
        };

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Moby request rejected");
            return Err(MobyError::Status { status, body });
        }

        let payload = response.json::<MobyResponse>().await?;
        info!(shop_id, "Moby answered");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_client(server: &MockServer) -> MobyClient {
        MobyClient::new(format!("{}/willy/moby-chat", server.base_url()), "tw_key")
    }

    #[tokio::test]
    async fn test_ask_sends_tagged_request_with_api_key() {
        let server = MockServer::start();
        let payload = json!({
            "isError": false,
            "responses": [{ "question": "What is my ROAS last 30 days?" }],
            "assistantConclusion": "done"
        });
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/willy/moby-chat")
                .header("x-api-key", "tw_key")
                .json_body(json!({
                    "source": "orcabase",
                    "question": "What is my ROAS last 30 days?",
                    "shopId": "example-store.com"
                }));
            then.status(200).json_body(payload.clone());
        });

        let client = test_client(&server);
        let answer = client
            .ask("What is my ROAS last 30 days?", "example-store.com")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(answer, payload);
    }

    #[tokio::test]
    async fn test_ask_surfaces_http_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/willy/moby-chat");
            then.status(403).body("invalid api key");
        });

        let client = test_client(&server);
        let err = client.ask("question", "shop").await.unwrap_err();

        match err {
            MobyError::Status { status, body } => {
                assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ask_rejects_non_json_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/willy/moby-chat");
            then.status(200).body("not json");
        });

        let client = test_client(&server);
        let err = client.ask("question", "shop").await.unwrap_err();
        assert!(matches!(err, MobyError::Request(_)));
    }
}

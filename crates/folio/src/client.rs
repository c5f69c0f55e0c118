use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::models::{ChatRequest, VoiceResponse};

const RESPOND_PATH: &str = "/api/ai/chat/respond";
const HEALTH_PATH: &str = "/health";

/// Client for the assistant API. Stateless beyond its read-only config;
/// calls are independent and safe to issue concurrently.
pub struct AssistantClient {
    client: Client,
    config: ClientConfig,
}

impl AssistantClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::unknown(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a query with the configured account and the default word budget
    /// for the speakable summary.
    pub async fn respond(&self, query: &str) -> ClientResult<VoiceResponse> {
        let request = ChatRequest::voice(query, self.config.account_id);
        self.respond_with(request).await
    }

    /// Submit a query for a specific account and speak-word budget.
    pub async fn respond_as(
        &self,
        query: &str,
        account_id: i64,
        max_speak_words: u32,
    ) -> ClientResult<VoiceResponse> {
        self.respond_with(ChatRequest::new(query, account_id, max_speak_words))
            .await
    }

    /// One request, one classified outcome. No retries; the caller decides
    /// whether to resubmit.
    pub async fn respond_with(&self, request: ChatRequest) -> ClientResult<VoiceResponse> {
        let url = self.url(RESPOND_PATH);
        debug!(account_id = request.account_id, %url, "submitting query");

        let response = self
            .client
            .post(&url)
            .timeout(self.config.request_timeout)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(code = status.as_u16(), "assistant API returned an error");
            return Err(ClientError::ApiStatus {
                code: status.as_u16(),
                body,
            });
        }

        // Typed deserialization doubles as schema validation: a 2xx body that
        // does not match the response shape is classified Unknown.
        response
            .json::<VoiceResponse>()
            .await
            .map_err(|e| ClientError::unknown(e.to_string()))
    }

    /// Reachability probe. Collapses every failure mode into `false`.
    pub async fn check_health(&self) -> bool {
        let result = self
            .client
            .get(self.url(HEALTH_PATH))
            .timeout(self.config.probe_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "health probe failed");
                false
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

fn classify_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout
    } else if error.is_connect() {
        ClientError::NetworkUnavailable
    } else {
        ClientError::unknown(error.to_string())
    }
}

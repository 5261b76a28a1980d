//! EdgeFunctionGateway - HTTP client for the hosted chat function.
//!
//! The function is reached with a plain JSON POST authenticated by the
//! project's anonymous key. The model API key lives server-side only.

use std::time::Duration;

use async_trait::async_trait;
use prenatal_core::config::GatewayConfig;
use prenatal_core::gateway::{ChatGateway, ChatRequest, ChatResponse};
use prenatal_core::{AssistantError, Result};
use reqwest::Client;

/// Gateway implementation calling `{endpoint}/functions/v1/{function}`.
#[derive(Clone)]
pub struct EdgeFunctionGateway {
    client: Client,
    url: String,
    anon_key: String,
    timeout: Option<Duration>,
}

impl EdgeFunctionGateway {
    /// Creates a gateway for the given connection settings.
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.function_url(),
            anon_key: config.anon_key.clone(),
            timeout: None,
        }
    }

    /// Sets a transport timeout. Off by default: a hung call keeps the
    /// conversation awaiting its reply.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatGateway for EdgeFunctionGateway {
    async fn invoke(&self, request: ChatRequest) -> Result<ChatResponse> {
        tracing::debug!(
            "[EdgeFunctionGateway] POST {} (conversation: {:?})",
            self.url,
            request.conversation_id
        );

        let mut builder = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("apikey", &self.anon_key)
            .json(&request);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AssistantError::gateway(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::gateway_status(
                status.as_u16(),
                format!("Edge function error ({}): {}", status, error_text),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::gateway(format!("Failed to read response: {}", e)))?;

        serde_json::from_str::<ChatResponse>(&body)
            .map_err(|e| AssistantError::protocol(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_config() {
        let config = GatewayConfig::new("https://abc.supabase.co/", "anon");
        let gateway = EdgeFunctionGateway::new(&config);
        assert_eq!(gateway.url(), "https://abc.supabase.co/functions/v1/health-chat");
    }
}

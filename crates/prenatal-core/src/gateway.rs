//! Remote chat gateway contract.
//!
//! The gateway is an opaque request/response service. Implementations make
//! exactly one attempt per call; retries, if any, are the caller's business
//! and the conversation layer never retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body sent to the remote chat function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Correlation token from the previous exchange; `null` on the first one.
    pub conversation_id: Option<String>,
    pub session_id: String,
    pub user_age: u32,
}

/// Body returned by the remote chat function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Performs a single request/response exchange.
    async fn invoke(&self, request: ChatRequest) -> Result<ChatResponse>;
}

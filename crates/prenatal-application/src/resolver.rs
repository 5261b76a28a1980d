//! Response resolution.
//!
//! Turns one user utterance into reply text, either from the canned demo
//! rules or from the remote gateway. Resolution never fails: every error is
//! folded into a substitute reply and logged.

use std::sync::Arc;
use std::time::Duration;

use prenatal_core::conversation::AssistantMode;
use prenatal_core::gateway::{ChatGateway, ChatRequest};
use prenatal_core::knowledge::demo::demo_reply;
use prenatal_core::knowledge::prompts::{
    NOT_UNDERSTOOD_REPLY, REMOTE_NOT_CONFIGURED_REPLY, remote_failure_reply,
};
use prenatal_core::session::SessionIdentityProvider;

/// Conversation context read for a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    pub age: u32,
    pub mode: AssistantMode,
    pub correlation_token: Option<String>,
}

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Canned demo reply.
    Canned,
    /// Reply text from the gateway, or the not-understood fallback.
    Remote,
    /// Remote mode without endpoint/key; explanatory text.
    NotConfigured,
    /// Gateway call failed; apology text.
    Degraded,
}

/// Result of resolving one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    /// Token returned by the gateway, replacing the stored one when present.
    pub correlation_token: Option<String>,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    fn local(reply: impl Into<String>, outcome: ResolutionOutcome) -> Self {
        Self {
            reply: reply.into(),
            correlation_token: None,
            outcome,
        }
    }
}

/// Resolves utterances for one conversation configuration.
pub struct ResponseResolver {
    demo_delay: Duration,
    gateway: Option<Arc<dyn ChatGateway>>,
    identity: SessionIdentityProvider,
}

impl ResponseResolver {
    /// `gateway` is `None` when remote mode is not configured.
    pub fn new(
        demo_delay: Duration,
        gateway: Option<Arc<dyn ChatGateway>>,
        identity: SessionIdentityProvider,
    ) -> Self {
        Self {
            demo_delay,
            gateway,
            identity,
        }
    }

    pub fn has_gateway(&self) -> bool {
        self.gateway.is_some()
    }

    /// Resolves `utterance` (already trimmed and non-empty).
    pub async fn resolve(&self, utterance: &str, context: &ResolveContext) -> Resolution {
        match context.mode {
            AssistantMode::Demo => self.resolve_demo(utterance).await,
            AssistantMode::Remote => self.resolve_remote(utterance, context).await,
        }
    }

    async fn resolve_demo(&self, utterance: &str) -> Resolution {
        if !self.demo_delay.is_zero() {
            tokio::time::sleep(self.demo_delay).await;
        }
        Resolution::local(demo_reply(utterance), ResolutionOutcome::Canned)
    }

    async fn resolve_remote(&self, utterance: &str, context: &ResolveContext) -> Resolution {
        let Some(gateway) = &self.gateway else {
            tracing::warn!("[Resolver] Remote mode selected but gateway is not configured");
            return Resolution::local(REMOTE_NOT_CONFIGURED_REPLY, ResolutionOutcome::NotConfigured);
        };

        let request = ChatRequest {
            message: utterance.to_string(),
            conversation_id: context.correlation_token.clone(),
            session_id: self.identity.session_id().await,
            user_age: context.age,
        };

        match gateway.invoke(request).await {
            Ok(response) => {
                let reply = response
                    .content
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| NOT_UNDERSTOOD_REPLY.to_string());
                Resolution {
                    reply,
                    correlation_token: response.conversation_id.filter(|id| !id.is_empty()),
                    outcome: ResolutionOutcome::Remote,
                }
            }
            Err(e) => {
                tracing::error!("[Resolver] Gateway call failed: {}", e);
                Resolution::local(
                    remote_failure_reply(&e.user_message()),
                    ResolutionOutcome::Degraded,
                )
            }
        }
    }
}

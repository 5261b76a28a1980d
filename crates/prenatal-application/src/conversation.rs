//! Conversation state management.
//!
//! A [`ConversationService`] owns one conversation: its bounded history, the
//! correlation token handed out by the remote gateway, the user's age and the
//! configured mode. Construct one per page/session context and share it via
//! `Arc`; there is no process-wide instance.
//!
//! # Ordering
//!
//! Sends are serialized by a single-flight guard. A second `send_message`
//! issued while a reply is pending waits its turn (FIFO), so history always
//! reads user/reply pairs in call order. `try_send_message` refuses instead
//! of waiting. `reset` takes the same guard and therefore runs after any
//! in-flight exchange has completed.
//!
//! Dropping a pending `send_message` future leaves its user message in
//! history without a reply; there is no other cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use prenatal_core::config::{AssistantConfig, GatewayConfig};
use prenatal_core::conversation::{ChatMessage, ConversationPhase, History};
use prenatal_core::gateway::ChatGateway;
use prenatal_core::knowledge::DEFAULT_USER_AGE;
use prenatal_core::knowledge::prompts::term_explanation_prompt;
use prenatal_core::session::SessionIdentityProvider;
use prenatal_core::{AssistantError, Result};
use prenatal_interaction::EdgeFunctionGateway;
use tokio::sync::{Mutex, RwLock};

use crate::resolver::{ResolveContext, ResponseResolver};

/// Builds a gateway for a configured endpoint.
pub type GatewayFactory = Arc<dyn Fn(&GatewayConfig) -> Arc<dyn ChatGateway> + Send + Sync>;

fn edge_function_factory() -> GatewayFactory {
    Arc::new(|config: &GatewayConfig| {
        Arc::new(EdgeFunctionGateway::new(config)) as Arc<dyn ChatGateway>
    })
}

struct ConversationState {
    history: History,
    correlation_token: Option<String>,
    user_age: u32,
}

struct Engine {
    config: AssistantConfig,
    resolver: Arc<ResponseResolver>,
}

/// Clears the awaiting flag even if the send future is dropped mid-flight.
struct AwaitingGuard<'a>(&'a AtomicBool);

impl<'a> AwaitingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for AwaitingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct ConversationService {
    state: RwLock<ConversationState>,
    engine: RwLock<Engine>,
    /// Single-flight guard serializing sends and resets.
    flight: Mutex<()>,
    awaiting: AtomicBool,
    identity: SessionIdentityProvider,
    gateway_factory: GatewayFactory,
}

impl ConversationService {
    /// Creates a conversation using the HTTP edge-function gateway.
    pub fn new(config: AssistantConfig, identity: SessionIdentityProvider) -> Self {
        Self::with_gateway_factory(config, identity, edge_function_factory())
    }

    /// Creates a conversation with a custom gateway constructor.
    pub fn with_gateway_factory(
        config: AssistantConfig,
        identity: SessionIdentityProvider,
        gateway_factory: GatewayFactory,
    ) -> Self {
        let engine = Self::build_engine(config, &identity, &gateway_factory);
        Self {
            state: RwLock::new(ConversationState {
                history: History::new(),
                correlation_token: None,
                user_age: DEFAULT_USER_AGE,
            }),
            engine: RwLock::new(engine),
            flight: Mutex::new(()),
            awaiting: AtomicBool::new(false),
            identity,
            gateway_factory,
        }
    }

    fn build_engine(
        config: AssistantConfig,
        identity: &SessionIdentityProvider,
        gateway_factory: &GatewayFactory,
    ) -> Engine {
        let gateway = config.gateway.as_ref().map(|g| gateway_factory(g));
        let resolver = ResponseResolver::new(config.demo_delay, gateway, identity.clone());
        Engine {
            config,
            resolver: Arc::new(resolver),
        }
    }

    /// Builds a fresh conversation with the same configuration and
    /// collaborators. The user's age carries over; history and correlation
    /// do not.
    pub async fn recreate(&self) -> Self {
        let config = self.engine.read().await.config.clone();
        let fresh = Self::with_gateway_factory(
            config,
            self.identity.clone(),
            self.gateway_factory.clone(),
        );
        fresh.set_user_age(self.user_age().await).await;
        fresh
    }

    /// Sends a user message and returns the assistant's reply.
    ///
    /// Returns `None` without touching state when `text` is blank. Otherwise
    /// always yields a reply: resolver failures become substitute messages.
    pub async fn send_message(&self, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let _flight = self.flight.lock().await;
        Some(self.exchange(text).await)
    }

    /// Like [`send_message`](Self::send_message) but refuses with
    /// [`AssistantError::Busy`] instead of waiting for a pending reply.
    pub async fn try_send_message(&self, text: &str) -> Result<Option<ChatMessage>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let _flight = self.flight.try_lock().map_err(|_| AssistantError::Busy)?;
        Ok(Some(self.exchange(text).await))
    }

    /// Asks the assistant for a plain-language explanation of `term`.
    pub async fn ask_term(&self, term: &str) -> Option<String> {
        if term.trim().is_empty() {
            return None;
        }
        self.send_message(&term_explanation_prompt(term.trim()))
            .await
            .map(|reply| reply.content)
    }

    async fn exchange(&self, text: &str) -> ChatMessage {
        let (resolver, mode) = {
            let engine = self.engine.read().await;
            (engine.resolver.clone(), engine.config.mode)
        };

        let context = {
            let mut state = self.state.write().await;
            state.history.push(ChatMessage::user(text));
            ResolveContext {
                age: state.user_age,
                mode,
                correlation_token: state.correlation_token.clone(),
            }
        };

        let resolution = {
            let _awaiting = AwaitingGuard::enter(&self.awaiting);
            tracing::debug!("[Conversation] Resolving ({} mode, age {})", mode, context.age);
            resolver.resolve(text, &context).await
        };
        tracing::info!("[Conversation] Reply resolved: {:?}", resolution.outcome);

        let reply = ChatMessage::assistant(resolution.reply);
        let mut state = self.state.write().await;
        if let Some(token) = resolution.correlation_token {
            state.correlation_token = Some(token);
        }
        state.history.push(reply.clone());
        reply
    }

    /// Appends a system message. Hidden from [`history`](Self::history) and
    /// never forwarded to the gateway; it still takes a retention slot until
    /// evicted.
    pub async fn prime(&self, content: impl Into<String>) {
        self.state
            .write()
            .await
            .history
            .push(ChatMessage::system(content));
    }

    /// Replaces the user's age. Applies from the next send onwards.
    pub async fn set_user_age(&self, age: u32) {
        self.state.write().await.user_age = age;
    }

    pub async fn user_age(&self) -> u32 {
        self.state.read().await.user_age
    }

    /// Clears history and correlation token; age and mode are kept.
    pub async fn reset(&self) {
        let _flight = self.flight.lock().await;
        let mut state = self.state.write().await;
        state.history.clear();
        state.correlation_token = None;
        tracing::info!("[Conversation] Reset");
    }

    /// Returns all non-system messages in order.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.state.read().await.history.visible()
    }

    pub async fn correlation_token(&self) -> Option<String> {
        self.state.read().await.correlation_token.clone()
    }

    pub async fn is_demo_mode(&self) -> bool {
        self.engine.read().await.config.is_demo_mode()
    }

    pub async fn config(&self) -> AssistantConfig {
        self.engine.read().await.config.clone()
    }

    /// Replaces configuration and rebuilds the resolver. Takes effect for the
    /// next send; a pending reply finishes with the previous configuration.
    pub async fn update_config(&self, config: AssistantConfig) {
        let engine = Self::build_engine(config, &self.identity, &self.gateway_factory);
        tracing::info!(
            "[Conversation] Configuration updated: mode={} gateway={}",
            engine.config.mode,
            engine.resolver.has_gateway()
        );
        *self.engine.write().await = engine;
    }

    pub fn phase(&self) -> ConversationPhase {
        if self.awaiting.load(Ordering::SeqCst) {
            ConversationPhase::AwaitingReply
        } else {
            ConversationPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prenatal_core::knowledge::demo::{AMH_REPLY, FREE_POLICY_REPLY};
    use prenatal_core::session::InMemorySessionStore;
    use std::time::Duration;

    fn demo_service() -> ConversationService {
        ConversationService::new(
            AssistantConfig::demo().with_demo_delay(Duration::ZERO),
            SessionIdentityProvider::new(Arc::new(InMemorySessionStore::new())),
        )
    }

    #[tokio::test]
    async fn test_blank_input_is_noop() {
        let service = demo_service();
        assert!(service.send_message("   \n").await.is_none());
        assert!(service.try_send_message("").await.unwrap().is_none());
        assert!(service.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let service = demo_service();
        service.send_message("  免费政策  ").await.unwrap();
        let history = service.history().await;
        assert_eq!(history[0].content, "免费政策");
        assert_eq!(history[1].content, FREE_POLICY_REPLY);
    }

    #[tokio::test]
    async fn test_reset_keeps_age_and_mode() {
        let service = demo_service();
        service.set_user_age(36).await;
        service.send_message("AMH").await.unwrap();
        service.reset().await;

        assert!(service.history().await.is_empty());
        assert_eq!(service.user_age().await, 36);
        assert!(service.is_demo_mode().await);
    }

    #[tokio::test]
    async fn test_system_messages_are_hidden() {
        let service = demo_service();
        service.prime("system priming").await;
        let reply = service.send_message("amh").await.unwrap();
        assert_eq!(reply.content, AMH_REPLY);

        let history = service.history().await;
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|m| !m.is_system()));
    }

    #[tokio::test]
    async fn test_system_message_occupies_retention_slot() {
        let service = demo_service();
        service.prime("context").await;
        for n in 1..=10 {
            service.send_message(&format!("q{}", n)).await.unwrap();
        }
        // 1 system + 20 visible exceeds the cap; the system entry is evicted first
        let history = service.history().await;
        assert_eq!(history.len(), 20);
        assert_eq!(history[0].content, "q1");

        service.reset().await;
        service.prime("context").await;
        for n in 1..=11 {
            service.send_message(&format!("q{}", n)).await.unwrap();
        }
        let history = service.history().await;
        assert_eq!(history.len(), 20);
        assert_eq!(history[0].content, "q2");
    }

    #[tokio::test]
    async fn test_update_config_switches_mode() {
        let service = demo_service();
        assert!(service.is_demo_mode().await);

        service.update_config(AssistantConfig::remote(None)).await;
        assert!(!service.is_demo_mode().await);

        let reply = service.send_message("amh").await.unwrap();
        assert_eq!(
            reply.content,
            prenatal_core::knowledge::prompts::REMOTE_NOT_CONFIGURED_REPLY
        );
    }

    #[tokio::test]
    async fn test_recreate_starts_fresh_but_keeps_age() {
        let service = demo_service();
        service.set_user_age(34).await;
        service.send_message("amh").await.unwrap();

        let fresh = service.recreate().await;
        assert!(fresh.history().await.is_empty());
        assert_eq!(fresh.user_age().await, 34);
        assert_eq!(fresh.config().await, service.config().await);
        // The source conversation is untouched
        assert_eq!(service.history().await.len(), 2);
    }

    #[tokio::test]
    async fn test_phase_is_idle_between_sends() {
        let service = demo_service();
        assert_eq!(service.phase(), ConversationPhase::Idle);
        service.send_message("amh").await.unwrap();
        assert_eq!(service.phase(), ConversationPhase::Idle);
    }
}

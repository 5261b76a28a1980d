//! Application layer for the prenatal assistant.
//!
//! Coordinates the static knowledge, the remote gateway and the session
//! identity into per-conversation services.

pub mod conversation;
pub mod resolver;

pub use conversation::{ConversationService, GatewayFactory};
pub use resolver::{Resolution, ResolutionOutcome, ResolveContext, ResponseResolver};

//! Conversation mode and state types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// How replies are produced for a conversation.
///
/// Resolved once from configuration; only an explicit configuration update
/// replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssistantMode {
    /// Canned keyword replies, no backend required.
    Demo,
    /// Replies come from the remote chat gateway.
    Remote,
}

/// Represents where a conversation is in its send/receive cycle.
///
/// There is no terminal state; a conversation lives as long as its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConversationPhase {
    /// Waiting for user input.
    Idle,
    /// A user message has been appended and its reply is being resolved.
    AwaitingReply,
}

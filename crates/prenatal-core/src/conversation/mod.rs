//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ChatMessage`)
//! - `phase`: Conversation state machine (`ConversationPhase`)
//! - `history`: Bounded, ordered message buffer (`History`)
//!
//! # Usage
//!
//! ```ignore
//! use prenatal_core::conversation::{ChatMessage, MessageRole, History};
//! ```

mod history;
mod message;
mod phase;

// Re-export public API
pub use history::{History, MAX_HISTORY};
pub use message::{ChatMessage, MessageRole};
pub use phase::{AssistantMode, ConversationPhase};

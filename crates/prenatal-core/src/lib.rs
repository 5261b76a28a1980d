pub mod config;
pub mod conversation;
pub mod error;
pub mod gateway;
pub mod knowledge;
pub mod session;

// Re-export common error type
pub use error::{AssistantError, Result};

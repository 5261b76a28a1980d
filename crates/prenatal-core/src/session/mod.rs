//! Session identity module.
//!
//! - `store`: key-value storage contract (`SessionStore`) and an in-memory store
//! - `identity`: lazily created, persisted session id (`SessionIdentityProvider`)

mod identity;
mod store;

pub use identity::{SESSION_KEY, SessionIdentityProvider};
pub use store::{InMemorySessionStore, SessionStore};

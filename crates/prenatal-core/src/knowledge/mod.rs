//! Static knowledge consumed read-only by the assistant.
//!
//! Everything here is `'static` data plus pure lookups, shared freely
//! between conversations without locking.
//!
//! - `glossary`: medical term explanations
//! - `demo`: ordered keyword rules and canned replies
//! - `age`: age bracket profiles
//! - `package`: checkup package catalogue
//! - `hospital`: hospitals and their category filter
//! - `checklist`: checkup items grouped by category
//! - `prompts`: system prompt, quick questions and fixed assistant texts

pub mod age;
pub mod checklist;
pub mod demo;
pub mod glossary;
pub mod hospital;
pub mod package;
pub mod prompts;

pub use age::{AgeBracketProfile, DEFAULT_USER_AGE, age_bracket};
pub use checklist::{CHECKLIST, CheckCategory, CheckItem, checklist_category};
pub use demo::demo_reply;
pub use glossary::{KnowledgeEntry, explain_term, search_terms};
pub use hospital::{Hospital, HospitalType, hospitals};
pub use package::{CheckupPackage, RecommendedPackage};

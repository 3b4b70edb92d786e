//! Subject adapters for active-services.
//!
//! This crate implements the `Validatable` port from
//! `active-services-core` for a generic attribute-map [`Record`], together
//! with declarative [`Rule`]s and the record operations built on them.

pub mod operations;
pub mod record;
pub mod rules;

// Re-export commonly used adapters
pub use operations::{CreateRecord, UpdateRecord};
pub use record::Record;
pub use rules::{AttributeRule, Rule, RuleSet};

//! Domain layer for active-services.
//!
//! Pure value types with no I/O:
//!
//! - [`Validatable`]: the capability every subject exposes
//! - [`ValidationErrors`]: the ordered error collection subjects usually carry
//! - [`Outcome`]: a subject plus a snapshot of its messages

pub mod outcome;
pub mod validation;

pub use outcome::{Outcome, OutcomeReport};
pub use validation::{BASE, FieldError, Validatable, ValidationErrors, humanize};

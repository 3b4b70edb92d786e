//! Active Services Core - service objects with validation-backed outcomes.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       active-services-cli (runner)      │
//! └──────────────────┬──────────────────────┘
//!                    │ invokes by name
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Layer              │
//! │   (Operation, OperationRegistry)        │
//! └──────────────────┬──────────────────────┘
//!                    │ builds
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            Domain Layer                 │
//! │ (Outcome, Validatable, ValidationErrors)│
//! └──────────────────▲──────────────────────┘
//!                    │ implemented by
//! ┌──────────────────┴──────────────────────┐
//! │  active-services-adapters (Record, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Two kinds of failure never mix:
//!
//! - a business rule that does not hold is *data*: `Ok(outcome)` with
//!   `outcome.success() == false`;
//! - an operation that never overrode `call` is an *error*:
//!   `Err(ServiceError::NotImplemented { .. })`.
//!
//! ## Usage
//!
//! ```rust
//! use active_services_core::prelude::*;
//!
//! struct Signup {
//!     email: String,
//!     errors: ValidationErrors,
//! }
//!
//! impl Operation for Signup {
//!     type Subject = ValidationErrors;
//!
//!     fn call(&mut self) -> ServiceResult<Outcome<'_, ValidationErrors>> {
//!         if !self.email.contains('@') {
//!             self.errors.add("email", "is invalid");
//!         }
//!         Ok(self.result(&self.errors))
//!     }
//! }
//!
//! let mut signup = Signup { email: "nope".into(), errors: ValidationErrors::new() };
//! let outcome = signup.call()?;
//! assert!(!outcome.success());
//! assert_eq!(outcome.errors(), ["Email is invalid"]);
//! # Ok::<(), ServiceError>(())
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Invoke, Operation, OperationRegistry, ServiceObject};
    pub use crate::domain::{
        FieldError, Outcome, OutcomeReport, Validatable, ValidationErrors,
    };
    pub use crate::error::{ErrorCategory, ServiceError, ServiceResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application layer for active-services.
//!
//! This layer contains:
//! - **Operation**: the service object contract (`call` + `result`)
//! - **Registry**: name-addressed operations for dynamic composition
//!
//! Business rules live in the concrete operations, never here.

pub mod operation;
pub mod registry;

pub use operation::{Operation, ServiceObject};
pub use registry::{Invoke, OperationRegistry};

//! Name-addressed operation registry.
//!
//! Operations are generic over their subject, so the registry stores them
//! behind [`Invoke`], which turns the borrowed [`Outcome`] into an owned
//! [`OutcomeReport`].

use std::{collections::BTreeMap, fmt};

use tracing::{debug, info, instrument, warn};

use super::operation::Operation;
use crate::{
    domain::{Outcome, OutcomeReport},
    error::{ServiceError, ServiceResult},
};

/// Object-safe form of [`Operation`].
pub trait Invoke {
    /// Run the operation and detach its outcome from the subject.
    fn invoke(&mut self, name: &str) -> ServiceResult<OutcomeReport>;
}

impl<T: Operation> Invoke for T {
    fn invoke(&mut self, name: &str) -> ServiceResult<OutcomeReport> {
        let outcome: Outcome<'_, T::Subject> = self.call()?;
        Ok(outcome.report(name))
    }
}

type Factory<I> = Box<dyn Fn(I) -> Box<dyn Invoke> + Send + Sync>;

/// Maps operation names to factories that build a fresh operation from an
/// input of type `I` on every invocation.
pub struct OperationRegistry<I> {
    factories: BTreeMap<String, Factory<I>>,
}

impl<I> OperationRegistry<I> {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register `factory` under `name`.
    pub fn register<F, O>(&mut self, name: impl Into<String>, factory: F) -> ServiceResult<()>
    where
        F: Fn(I) -> O + Send + Sync + 'static,
        O: Invoke + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            warn!(operation = %name, "Duplicate registration rejected");
            return Err(ServiceError::DuplicateOperation { name });
        }

        debug!(operation = %name, "Operation registered");
        self.factories.insert(
            name,
            Box::new(move |input| -> Box<dyn Invoke> { Box::new(factory(input)) }),
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build the operation registered as `name` from `input` and run it.
    ///
    /// Validation failures come back as `Ok` with `success == false`;
    /// `Err` is reserved for unknown names and contract violations.
    #[instrument(skip_all, fields(operation = %name))]
    pub fn invoke(&self, name: &str, input: I) -> ServiceResult<OutcomeReport> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ServiceError::UnknownOperation {
                name: name.to_string(),
            })?;

        let mut operation = factory(input);
        let report = operation.invoke(name)?;

        info!(
            success = report.success,
            errors = report.errors.len(),
            "Operation finished"
        );
        Ok(report)
    }
}

impl<I> Default for OperationRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for OperationRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.names())
            .finish()
    }
}

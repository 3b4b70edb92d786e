//! The service object contract.

use std::{fmt, marker::PhantomData};

use crate::{
    domain::{Outcome, Validatable},
    error::{ServiceError, ServiceResult},
};

/// A unit of business logic with a single entry point.
///
/// Implementors receive whatever inputs they need through their own
/// constructor, do their work in [`call`](Operation::call), and finish with
/// [`result`](Operation::result) once the subject's validation state is
/// final.
///
/// ```
/// use active_services_core::prelude::*;
///
/// struct Rename<'a> {
///     errors: &'a mut ValidationErrors,
///     name: String,
/// }
///
/// impl Operation for Rename<'_> {
///     type Subject = ValidationErrors;
///
///     fn call(&mut self) -> ServiceResult<Outcome<'_, ValidationErrors>> {
///         if self.name.trim().is_empty() {
///             self.errors.add("name", "can't be blank");
///         }
///         Ok(self.result(&*self.errors))
///     }
/// }
///
/// let mut errors = ValidationErrors::new();
/// let mut op = Rename { errors: &mut errors, name: String::new() };
/// let outcome = op.call().unwrap();
/// assert_eq!(outcome.errors(), ["Name can't be blank"]);
/// ```
pub trait Operation {
    /// What the operation acts upon.
    type Subject: Validatable + ?Sized;

    /// Run the operation.
    ///
    /// The provided body always returns [`ServiceError::NotImplemented`];
    /// every concrete operation is expected to override it.
    fn call(&mut self) -> ServiceResult<Outcome<'_, Self::Subject>> {
        Err(ServiceError::not_implemented::<Self>())
    }

    /// Wrap `subject` in an [`Outcome`].
    fn result<'s>(&self, subject: &'s Self::Subject) -> Outcome<'s, Self::Subject> {
        Outcome::new(subject)
    }
}

/// An operation that keeps the default `call`.
///
/// Useful as a placeholder while the real operation is being written, and
/// for exercising the `NotImplemented` path.
pub struct ServiceObject<S: ?Sized> {
    _subject: PhantomData<fn(&S)>,
}

impl<S: ?Sized> ServiceObject<S> {
    pub fn new() -> Self {
        Self {
            _subject: PhantomData,
        }
    }
}

impl<S: ?Sized> Default for ServiceObject<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for ServiceObject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServiceObject")
    }
}

impl<S: Validatable + ?Sized> Operation for ServiceObject<S> {
    type Subject = S;
}

//! The subject capability and the error collection subjects usually carry.

use std::{fmt, rc::Rc, sync::Arc};

use serde::{Deserialize, Serialize};

/// Attribute name used for errors that belong to the subject as a whole.
pub const BASE: &str = "base";

/// Anything an operation can act upon and report validation errors for.
///
/// Implementors return human-readable messages in a stable order; an empty
/// vector means the subject is valid. The accessor must not trigger
/// validation itself: callers validate first, then build an
/// [`Outcome`](crate::domain::Outcome).
pub trait Validatable {
    /// Full, human-readable validation messages.
    fn validation_errors(&self) -> Vec<String>;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validation_errors(&self) -> Vec<String> {
        (**self).validation_errors()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validation_errors(&self) -> Vec<String> {
        (**self).validation_errors()
    }
}

impl<T: Validatable + ?Sized> Validatable for Rc<T> {
    fn validation_errors(&self) -> Vec<String> {
        (**self).validation_errors()
    }
}

impl<T: Validatable + ?Sized> Validatable for Arc<T> {
    fn validation_errors(&self) -> Vec<String> {
        (**self).validation_errors()
    }
}

/// A single message attached to an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
    pub attribute: String,
    pub message: String,
}

impl FieldError {
    pub fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Message prefixed by the humanized attribute, or the bare message for
    /// [`BASE`] errors.
    pub fn full_message(&self) -> String {
        if self.attribute == BASE {
            self.message.clone()
        } else {
            format!("{} {}", humanize(&self.attribute), self.message)
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

/// Ordered collection of attribute errors.
///
/// Insertion order is preserved, so `full_messages` is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    entries: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `attribute`.
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.entries.push(FieldError::new(attribute, message));
    }

    /// Record a message that is not tied to any attribute.
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.add(BASE, message);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }

    /// Raw messages recorded for one attribute.
    pub fn on(&self, attribute: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.attribute == attribute)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.entries.iter().map(FieldError::full_message).collect()
    }
}

impl Validatable for ValidationErrors {
    fn validation_errors(&self) -> Vec<String> {
        self.full_messages()
    }
}

impl Extend<FieldError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Turn an attribute name into a label: `first_name` -> `First name`,
/// `account_id` -> `Account`.
pub fn humanize(attribute: &str) -> String {
    let trimmed = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = trimmed.replace('_', " ");
    let spaced = spaced.trim();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

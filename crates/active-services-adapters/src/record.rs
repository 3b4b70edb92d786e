//! Attribute-map subject.

use std::collections::BTreeMap;

use tracing::debug;

use active_services_core::domain::{Validatable, ValidationErrors};

use crate::rules::RuleSet;

/// A named model with string attributes and the errors from its last
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    model: String,
    attributes: BTreeMap<String, String>,
    errors: ValidationErrors,
}

impl Record {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            attributes: BTreeMap::new(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn with_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.assign(attributes);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    /// Set one attribute, returning the previous value.
    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attributes.insert(attribute.into(), value.into())
    }

    /// Set many attributes at once; unknown keys are added.
    pub fn assign<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in attributes {
            self.set(key, value);
        }
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Direct access for operations that add their own business errors.
    pub fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    /// Replace the current errors with the result of `rules`.
    pub fn validate(&mut self, rules: &RuleSet) -> bool {
        self.errors = rules.apply(self);
        debug!(
            model = %self.model,
            errors = self.errors.len(),
            "Record validated"
        );
        self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Validatable for Record {
    fn validation_errors(&self) -> Vec<String> {
        self.errors.full_messages()
    }
}

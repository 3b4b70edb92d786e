//! Outcome of a single operation invocation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validation::Validatable;

/// Pairs a subject with the validation messages it carried when the
/// operation finished.
///
/// Messages are captured once, in [`Outcome::new`]. Changing the subject
/// afterwards does not change an outcome that already exists, so
/// `success() == errors().is_empty()` holds for its whole lifetime.
#[derive(Debug)]
pub struct Outcome<'a, S: ?Sized> {
    subject: &'a S,
    errors: Vec<String>,
}

impl<'a, S: Validatable + ?Sized> Outcome<'a, S> {
    /// Snapshot `subject`'s validation messages.
    pub fn new(subject: &'a S) -> Self {
        let errors = subject.validation_errors();
        debug!(errors = errors.len(), "Outcome captured");
        Self { subject, errors }
    }
}

impl<'a, S: ?Sized> Outcome<'a, S> {
    /// The subject the operation acted upon. Never a copy.
    pub fn subject(&self) -> &'a S {
        self.subject
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Owned summary, detached from the subject's lifetime.
    pub fn report(&self, operation: impl Into<String>) -> OutcomeReport {
        OutcomeReport {
            operation: operation.into(),
            success: self.success(),
            errors: self.errors.clone(),
        }
    }
}

impl<S: ?Sized> Clone for Outcome<'_, S> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject,
            errors: self.errors.clone(),
        }
    }
}

/// Serializable projection of an [`Outcome`] for callers that cannot hold a
/// borrow of the subject (registries, CLIs, logs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub operation: String,
    pub success: bool,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use mockall::{Sequence, mock};

    use super::*;

    mock! {
        Model {}
        impl Validatable for Model {
            fn validation_errors(&self) -> Vec<String>;
        }
    }

    fn model_returning(messages: Vec<&'static str>) -> MockModel {
        let mut model = MockModel::new();
        model
            .expect_validation_errors()
            .returning(move || messages.iter().map(|m| m.to_string()).collect());
        model
    }

    #[test]
    fn valid_subject_succeeds_with_no_errors() {
        let model = model_returning(vec![]);
        let outcome = Outcome::new(&model);

        assert!(outcome.success());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn invalid_subject_fails_and_keeps_order() {
        let model = model_returning(vec!["Name can't be blank", "Email is invalid"]);
        let outcome = Outcome::new(&model);

        assert!(!outcome.success());
        assert_eq!(outcome.errors(), ["Name can't be blank", "Email is invalid"]);
    }

    #[test]
    fn subject_is_the_same_reference() {
        let model = model_returning(vec![]);
        let outcome = Outcome::new(&model);

        assert!(std::ptr::eq(outcome.subject(), &model));
    }

    #[test]
    fn accessor_is_read_exactly_once() {
        let mut model = MockModel::new();
        model
            .expect_validation_errors()
            .times(1)
            .returning(|| vec!["I can't allow you to do that".to_string()]);

        let outcome = Outcome::new(&model);
        assert!(!outcome.success());
        assert!(!outcome.success());
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn later_subject_changes_do_not_leak_into_outcome() {
        let mut seq = Sequence::new();
        let mut model = MockModel::new();
        model
            .expect_validation_errors()
            .times(1)
            .in_sequence(&mut seq)
            .returning(Vec::new);
        model
            .expect_validation_errors()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| vec!["Name can't be blank".to_string()]);

        let outcome = Outcome::new(&model);
        assert_eq!(model.validation_errors(), vec!["Name can't be blank"]);

        assert!(outcome.success());
        assert!(outcome.errors().is_empty());
    }

    struct Counter {
        errors: RefCell<Vec<String>>,
    }

    impl Validatable for Counter {
        fn validation_errors(&self) -> Vec<String> {
            self.errors.borrow().clone()
        }
    }

    #[test]
    fn interior_mutation_after_construction_is_not_observed() {
        let subject = Counter {
            errors: RefCell::new(vec!["Name can't be blank".into()]),
        };
        let outcome = Outcome::new(&subject);

        subject.errors.borrow_mut().clear();

        assert!(!outcome.success());
        assert_eq!(outcome.errors(), ["Name can't be blank"]);
    }

    #[test]
    fn report_mirrors_outcome() {
        let model = model_returning(vec!["Name can't be blank"]);
        let report = Outcome::new(&model).report("users/create");

        assert_eq!(
            report,
            OutcomeReport {
                operation: "users/create".into(),
                success: false,
                errors: vec!["Name can't be blank".into()],
            }
        );
    }

    #[test]
    fn report_serializes_as_flat_object() {
        let model = model_returning(vec![]);
        let report = Outcome::new(&model).report("users/create");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["operation"], "users/create");
        assert_eq!(json["success"], true);
        assert_eq!(json["errors"], serde_json::json!([]));
    }
}

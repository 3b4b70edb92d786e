//! Ready-made operations over [`Record`].

use std::sync::Arc;

use tracing::{info, instrument};

use active_services_core::{
    application::Operation,
    domain::Outcome,
    error::ServiceResult,
};

use crate::{record::Record, rules::RuleSet};

/// Build a new record from attributes and validate it.
#[derive(Debug, Clone)]
pub struct CreateRecord {
    record: Record,
    attributes: Vec<(String, String)>,
    rules: Arc<RuleSet>,
}

impl CreateRecord {
    pub fn new(
        model: impl Into<String>,
        attributes: impl IntoIterator<Item = (String, String)>,
        rules: Arc<RuleSet>,
    ) -> Self {
        Self {
            record: Record::new(model),
            attributes: attributes.into_iter().collect(),
            rules,
        }
    }

    /// Start from `defaults` instead of an empty record.
    pub fn with_defaults(mut self, defaults: impl IntoIterator<Item = (String, String)>) -> Self {
        self.record.assign(defaults);
        self
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

impl Operation for CreateRecord {
    type Subject = Record;

    #[instrument(skip_all, fields(model = %self.record.model()))]
    fn call(&mut self) -> ServiceResult<Outcome<'_, Record>> {
        self.record.assign(std::mem::take(&mut self.attributes));
        let valid = self.record.validate(&self.rules);
        info!(valid, "Record created");
        Ok(self.result(&self.record))
    }
}

/// Apply changes to an existing record and revalidate it.
///
/// Attributes that are not part of the changes keep their values.
#[derive(Debug)]
pub struct UpdateRecord<'r> {
    record: &'r mut Record,
    changes: Vec<(String, String)>,
    rules: Arc<RuleSet>,
}

impl<'r> UpdateRecord<'r> {
    pub fn new(
        record: &'r mut Record,
        changes: impl IntoIterator<Item = (String, String)>,
        rules: Arc<RuleSet>,
    ) -> Self {
        Self {
            record,
            changes: changes.into_iter().collect(),
            rules,
        }
    }
}

impl Operation for UpdateRecord<'_> {
    type Subject = Record;

    #[instrument(skip_all, fields(model = %self.record.model()))]
    fn call(&mut self) -> ServiceResult<Outcome<'_, Record>> {
        let changed = self.changes.len();
        self.record.assign(std::mem::take(&mut self.changes));
        let valid = self.record.validate(&self.rules);
        info!(valid, changed, "Record updated");
        Ok(self.result(&*self.record))
    }
}

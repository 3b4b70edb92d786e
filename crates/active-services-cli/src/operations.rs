//! Operations the runner exposes, derived from configured models.

use std::sync::Arc;

use tracing::debug;

use active_services_adapters::CreateRecord;
use active_services_core::application::OperationRegistry;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// What `run` hands to an operation factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInput {
    pub attributes: Vec<(String, String)>,
}

impl RunInput {
    /// Parse repeated `KEY=VALUE` arguments.  Values may be empty or contain
    /// further `=` signs; keys may not be empty.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> CliResult<Self> {
        let attributes = raw
            .iter()
            .map(|arg| parse_attribute(arg.as_ref()))
            .collect::<CliResult<Vec<_>>>()?;
        Ok(Self { attributes })
    }
}

fn parse_attribute(raw: &str) -> CliResult<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::InvalidAttribute {
            raw: raw.to_string(),
        }),
    }
}

/// Register `<model>/create` for every configured model.
pub fn build_registry(config: &AppConfig) -> CliResult<OperationRegistry<RunInput>> {
    let mut registry = OperationRegistry::new();

    for (model, settings) in &config.models {
        let name = format!("{model}/create");
        let model = model.clone();
        let rules = Arc::new(settings.rules.clone());
        let defaults: Vec<(String, String)> = settings
            .defaults
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        registry.register(name, move |input: RunInput| {
            CreateRecord::new(model.clone(), input.attributes, Arc::clone(&rules))
                .with_defaults(defaults.clone())
        })?;
    }

    debug!(operations = registry.len(), "Registry built");
    Ok(registry)
}

//! Implementation of the `active-services run` command.

use std::process::ExitCode;

use tracing::info;

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::CliResult,
    operations::{RunInput, build_registry},
    output::OutputManager,
};

/// Exit status for an operation that ran but whose subject was invalid.
pub const VALIDATION_FAILED: u8 = 5;

/// Invoke the operation and print its outcome.
///
/// A failed outcome is a normal result, reported on stdout with
/// [`VALIDATION_FAILED`]; only contract or lookup failures become errors.
pub fn execute(args: RunArgs, config: &AppConfig, output: &OutputManager) -> CliResult<ExitCode> {
    let input = RunInput::parse(&args.attributes)?;
    let registry = build_registry(config)?;

    let report = registry.invoke(&args.operation, input)?;
    output.outcome(&report)?;

    info!(
        operation = %report.operation,
        success = report.success,
        "Run finished"
    );

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(VALIDATION_FAILED)
    })
}

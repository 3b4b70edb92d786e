//! Implementation of the `active-services list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    operations::build_registry,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let registry = build_registry(config)?;
    let names = registry.names();

    match args.format {
        ListFormat::Table => {
            output.header("Available Operations:")?;
            for name in &names {
                output.print(&format!("  {name}"))?;
            }
        }
        ListFormat::List => {
            for name in &names {
                output.print(name)?;
            }
        }
        ListFormat::Json => output.json(&names)?,
    }

    Ok(())
}

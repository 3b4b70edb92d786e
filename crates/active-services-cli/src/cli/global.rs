//! Flags accepted before or after any subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what the registry and operations do.
    ///
    /// `-v` logs each finished operation, `-vv` adds registrations and
    /// validation passes, `-vvv` logs everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail (-v, -vv, -vvv)",
        long_help = "Log more detail to stderr:
    (none)  - Warnings and errors
    -v      - Finished operations and their outcome
    -vv     - Registrations and validation passes
    -vvv    - Everything"
    )]
    pub verbose: u8,

    /// Print only failures: failed outcomes and errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only failed outcomes and errors"
    )]
    pub quiet: bool,

    /// Turn colour off.
    ///
    /// Any non-empty `NO_COLOR` other than a falsey word (`0`, `false`,
    /// `no`, `off`) turns colour off (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file declaring models, their defaults and their rules.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Model configuration file"
    )]
    pub config: Option<PathBuf>,

    /// How outcomes are rendered; overrides `output.format` in the config.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Outcome rendering"
    )]
    pub output_format: OutputFormat,
}

/// Outcome rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured `✓`/`✗` lines.
    Human,
    /// Same lines, no colour.
    Plain,
    /// One `OutcomeReport` object.
    Json,
}

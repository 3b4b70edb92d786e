//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value enums live here and nowhere else.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "active-services",
    bin_name = "active-services",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Run service objects and inspect their outcomes",
    long_about = "active-services runs the operations derived from your configured \
                  models and reports whether they succeeded, with every validation \
                  message when they did not.",
    after_help = "EXAMPLES:\n\
        \x20 active-services run user/create -a name=Ada -a email=ada@example.com\n\
        \x20 active-services --output-format json run user/create -a name=\n\
        \x20 active-services list\n\
        \x20 active-services completions bash > /usr/share/bash-completion/completions/active-services",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Invoke a registered operation.
    #[command(
        visible_alias = "r",
        about = "Run an operation",
        after_help = "EXAMPLES:\n\
            \x20 active-services run user/create -a name=Ada -a email=ada@example.com\n\
            \x20 active-services run user/create --attr role=admin\n\n\
            EXIT STATUS:\n\
            \x20 0  operation succeeded\n\
            \x20 5  operation ran but validation failed"
    )]
    Run(RunArgs),

    /// List registered operations.
    #[command(
        visible_alias = "ls",
        about = "List available operations",
        after_help = "EXAMPLES:\n\
            \x20 active-services list\n\
            \x20 active-services list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 active-services completions bash > ~/.local/share/bash-completion/completions/active-services\n\
            \x20 active-services completions zsh  > ~/.zfunc/_active-services"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 active-services config show\n\
            \x20 active-services config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `active-services run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Operation name as shown by `list`, e.g. `user/create`.
    #[arg(value_name = "OPERATION", help = "Operation to run")]
    pub operation: String,

    /// Attribute assignments passed to the operation.
    #[arg(
        short = 'a',
        long = "attr",
        value_name = "KEY=VALUE",
        help = "Attribute to assign (repeatable)"
    )]
    pub attributes: Vec<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `active-services list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Header plus one indented name per line.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `active-services completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `active-services config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the default configuration file path.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_run_with_attributes() {
        let cli = Cli::parse_from([
            "active-services",
            "run",
            "user/create",
            "-a",
            "name=Ada",
            "--attr",
            "email=ada@example.com",
        ]);

        let Commands::Run(args) = cli.command else {
            panic!("expected Run command");
        };
        assert_eq!(args.operation, "user/create");
        assert_eq!(args.attributes, vec!["name=Ada", "email=ada@example.com"]);
    }

    #[test]
    fn run_alias() {
        let cli = Cli::parse_from(["active-services", "r", "user/create"]);
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "active-services",
            "list",
            "--output-format",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn no_color_env_accepts_conventional_values() {
        use clap::{CommandFactory, FromArgMatches};

        // A private variable keeps parallel tests from seeing the change.
        const VAR: &str = "ACTIVE_SERVICES_CLI_TEST_NO_COLOR";
        let parse = |value: &str| {
            // SAFETY: only this test reads or writes `VAR`.
            unsafe { std::env::set_var(VAR, value) };
            let matches = Cli::command()
                .mut_arg("no_color", |arg| arg.env(VAR))
                .try_get_matches_from(["active-services", "list"])
                .unwrap();
            Cli::from_arg_matches(&matches).unwrap().global.no_color
        };

        assert!(parse("1"));
        assert!(parse("true"));
        assert!(!parse(""));
        assert!(!parse("0"));
        assert!(!parse("false"));

        unsafe { std::env::remove_var(VAR) };
        let cli = Cli::parse_from(["active-services", "--no-color", "list"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["active-services", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}

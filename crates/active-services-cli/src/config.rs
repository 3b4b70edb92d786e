//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ACTIVE_SERVICES__OUTPUT__FORMAT=json`
//! 3. Config file (`--config FILE`, or the per-user default location)
//! 4. Built-in defaults (always present)
//!
//! Tables merge key by key across layers; arrays such as a model's `rules`
//! are replaced wholesale by the higher layer.

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use active_services_adapters::{Rule, RuleSet};

/// Prefix for environment overrides; nested keys are joined by `__`.
pub const ENV_PREFIX: &str = "ACTIVE_SERVICES";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Models keyed by name; each one yields a `<name>/create` operation.
    pub models: BTreeMap<String, ModelConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

/// One configured model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Attributes every new record starts with.
    pub defaults: BTreeMap<String, String>,
    /// Validation rules, applied in order.
    pub rules: RuleSet,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let user = ModelConfig {
            defaults: BTreeMap::new(),
            rules: RuleSet::new()
                .with("name", Rule::Presence)
                .with("email", Rule::Presence),
        };

        Self {
            output: OutputConfig::default(),
            models: BTreeMap::from([("user".to_string(), user)]),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.active-services.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "active-services", "active-services")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".active-services.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn default_declares_user_model() {
        let cfg = AppConfig::default();
        let user = cfg.models.get("user").unwrap();
        assert_eq!(user.rules.len(), 2);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_merges_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [output]
            format = "json"

            [models.account.defaults]
            plan = "free"

            [[models.account.rules]]
            attribute = "plan"
            kind = "inclusion"
            in = ["free", "pro"]
            "#
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.output.format, "json");
        assert!(cfg.models.contains_key("user"));
        let account = cfg.models.get("account").unwrap();
        assert_eq!(account.defaults.get("plan").map(String::as_str), Some("free"));
        assert_eq!(account.rules.len(), 1);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

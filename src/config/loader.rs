//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::BankingConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `backend.base_url`.
pub const BASE_URL_ENV: &str = "BANKING_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// `BANKING_BASE_URL`, when set, replaces the file's base URL before validation.
pub fn load_config(path: &Path) -> Result<BankingConfig, ConfigError> {
    resolve_config(Some(path), None)
}

/// Build a validated configuration without a file (defaults plus env overrides).
pub fn default_config() -> Result<BankingConfig, ConfigError> {
    resolve_config(None, None)
}

/// Assemble the effective configuration and validate it as a whole.
///
/// Precedence, lowest first: defaults or the file at `path`, then
/// `BANKING_BASE_URL`, then `base_url` (the command line).
pub fn resolve_config(
    path: Option<&Path>,
    base_url: Option<String>,
) -> Result<BankingConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path).map_err(ConfigError::Io)?)?,
        None => BankingConfig::default(),
    };
    apply_overrides(&mut config, std::env::var(BASE_URL_ENV).ok(), base_url)?;

    tracing::debug!(path = ?path, base_url = %config.backend.base_url, "Configuration loaded");
    Ok(config)
}

fn parse_config(content: &str) -> Result<BankingConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

fn apply_env_overrides(config: &mut BankingConfig, base_url: Option<String>) {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        config.backend.base_url = url;
    }
}

fn apply_overrides(
    config: &mut BankingConfig,
    env_base_url: Option<String>,
    cli_base_url: Option<String>,
) -> Result<(), ConfigError> {
    apply_env_overrides(config, env_base_url);
    apply_env_overrides(config, cli_base_url);
    validate_config(config).map_err(ConfigError::Validation)
}

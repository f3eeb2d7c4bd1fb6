//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.signpost/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::filter::QueryScope;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SignpostConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Category names offered by the filter panel, without the "All" entry.
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// URL of the resource feed to load on startup.
    pub source: Option<String>,
    /// Local JSON file to load instead of fetching.
    pub data_file: Option<String>,
    /// "all-fields" or "title-summary".
    pub query_scope: Option<QueryScope>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATEGORIES: [&str; 4] = ["Academic", "Wellness", "Financial", "Tech"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the startup resource store comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Fetch a JSON feed over HTTP.
    Http(String),
    /// Read a JSON file from disk.
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// None means start with an empty store and an Idle loader.
    pub source: Option<DataSource>,
    pub query_scope: QueryScope,
    pub categories: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.signpost/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".signpost").join("config.toml"))
}

/// Load config from `~/.signpost/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SignpostConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SignpostConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SignpostConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SignpostConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SignpostConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Signpost Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# source = "https://example.org/resources.json"   # Or set SIGNPOST_SOURCE env var
# data_file = "resources.json"                    # Local file, wins over source
# query_scope = "all-fields"                      # "all-fields" or "title-summary"

# Category names offered by the filter panel ("All" is always present).
# categories = ["Academic", "Wellness", "Financial", "Tech"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_source` and `cli_data` come from CLI flags (None = not specified).
/// A data file beats a URL at every layer: `--data` over `--source`, and
/// `data_file` over `source` within the config file.
pub fn resolve(
    config: &SignpostConfig,
    cli_source: Option<&str>,
    cli_data: Option<&Path>,
) -> ResolvedConfig {
    let source = if let Some(path) = cli_data {
        Some(DataSource::File(path.to_path_buf()))
    } else if let Some(url) = cli_source {
        Some(DataSource::Http(url.to_string()))
    } else if let Ok(url) = std::env::var("SIGNPOST_SOURCE") {
        Some(DataSource::Http(url))
    } else if let Some(path) = &config.general.data_file {
        Some(DataSource::File(PathBuf::from(path)))
    } else {
        config
            .general
            .source
            .clone()
            .map(DataSource::Http)
    };

    let categories = config.categories.clone().unwrap_or_else(|| {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    });

    ResolvedConfig {
        source,
        query_scope: config.general.query_scope.unwrap_or_default(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve(&SignpostConfig::default(), None, None);
        // SIGNPOST_SOURCE may leak in from the environment; only assert the
        // parts that are hermetic.
        assert_eq!(resolved.query_scope, QueryScope::AllFields);
        assert_eq!(resolved.categories, DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_cli_data_beats_cli_source() {
        let resolved = resolve(
            &SignpostConfig::default(),
            Some("https://example.org/feed.json"),
            Some(Path::new("local.json")),
        );
        assert!(matches!(resolved.source, Some(DataSource::File(_))));
    }

    #[test]
    fn test_config_file_fields_parse() {
        let config: SignpostConfig = toml::from_str(
            r#"
            [general]
            source = "https://example.org/resources.json"
            query_scope = "title-summary"

            categories = ["Housing", "Legal"]
            "#,
        )
        .unwrap();
        let resolved = resolve(&config, None, None);
        assert!(matches!(resolved.source, Some(DataSource::Http(_))));
        assert_eq!(resolved.query_scope, QueryScope::TitleSummary);
        assert_eq!(resolved.categories, ["Housing", "Legal"]);
    }

    #[test]
    fn test_sparse_config_parses() {
        let config: SignpostConfig = toml::from_str("").unwrap();
        assert!(config.general.source.is_none());
        assert!(config.categories.is_none());
    }
}

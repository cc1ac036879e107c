//! Top-level GED configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, CacheConfig, ColumnConfig, InputConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::models::AnalysisWindow;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GED_*`)
/// 3. Project config (`ged.toml` in the analysis root)
/// 4. User config (`~/.ged/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GedConfig {
    pub input: InputConfig,
    pub columns: ColumnConfig,
    pub cache: CacheConfig,
    pub analysis: AnalysisConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub delimiter: Option<char>,
    pub encoding: Option<String>,
    pub date_format: Option<String>,
    pub cache_enabled: Option<bool>,
    pub window: Option<AnalysisWindow>,
}

impl GedConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a parse failure is fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        ::tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GedConfig) -> Result<(), ConfigError> {
        if let Some(delimiter) = config.input.delimiter {
            if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' {
                return Err(ConfigError::ValidationFailed {
                    field: "input.delimiter".to_string(),
                    message: format!("must be a single ASCII separator, got {delimiter:?}"),
                });
            }
        }
        if config.input.resolve_encoding().is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "input.encoding".to_string(),
                message: format!("unknown encoding label {:?}", config.input.effective_encoding()),
            });
        }
        if config.input.effective_date_format().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "input.date_format".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.cache.effective_max_entries() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.max_entries".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.ged/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".ged").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut GedConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GedConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut GedConfig, other: &GedConfig) {
        // Input
        if other.input.delimiter.is_some() {
            base.input.delimiter = other.input.delimiter;
        }
        if other.input.encoding.is_some() {
            base.input.encoding = other.input.encoding.clone();
        }
        if other.input.date_format.is_some() {
            base.input.date_format = other.input.date_format.clone();
        }
        if other.input.trim_fields.is_some() {
            base.input.trim_fields = other.input.trim_fields;
        }

        // Columns
        let (b, o) = (&mut base.columns, &other.columns);
        for (slot, value) in [
            (&mut b.deposit_date, &o.deposit_date),
            (&mut b.document_type, &o.document_type),
            (&mut b.project, &o.project),
            (&mut b.emitter, &o.emitter),
            (&mut b.lot, &o.lot),
            (&mut b.revision_index, &o.revision_index),
            (&mut b.added_by, &o.added_by),
            (&mut b.document_label, &o.document_label),
        ] {
            if value.is_some() {
                *slot = value.clone();
            }
        }

        // Cache
        if other.cache.enabled.is_some() {
            base.cache.enabled = other.cache.enabled;
        }
        if other.cache.max_entries.is_some() {
            base.cache.max_entries = other.cache.max_entries;
        }
        if other.cache.time_to_idle_secs.is_some() {
            base.cache.time_to_idle_secs = other.cache.time_to_idle_secs;
        }

        // Analysis
        if other.analysis.window.is_some() {
            base.analysis.window = other.analysis.window;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GED_INPUT_ENCODING`, `GED_CACHE_MAX_ENTRIES`, etc.
    fn apply_env_overrides(config: &mut GedConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("GED_INPUT_DELIMITER") {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.input.delimiter = Some(c),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "GED_INPUT_DELIMITER".to_string(),
                        message: format!("expected a single character, got {val:?}"),
                    })
                }
            }
        }
        if let Ok(val) = std::env::var("GED_INPUT_ENCODING") {
            config.input.encoding = Some(val);
        }
        if let Ok(val) = std::env::var("GED_INPUT_DATE_FORMAT") {
            config.input.date_format = Some(val);
        }
        if let Ok(val) = std::env::var("GED_CACHE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.cache.enabled = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GED_CACHE_MAX_ENTRIES") {
            if let Ok(v) = val.parse::<u64>() {
                config.cache.max_entries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GED_ANALYSIS_WINDOW") {
            let window = val.parse::<AnalysisWindow>().map_err(|e| ConfigError::InvalidValue {
                field: "GED_ANALYSIS_WINDOW".to_string(),
                message: e.to_string(),
            })?;
            config.analysis.window = Some(window);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GedConfig, cli: &CliOverrides) {
        if let Some(v) = cli.delimiter {
            config.input.delimiter = Some(v);
        }
        if let Some(ref v) = cli.encoding {
            config.input.encoding = Some(v.clone());
        }
        if let Some(ref v) = cli.date_format {
            config.input.date_format = Some(v.clone());
        }
        if let Some(v) = cli.cache_enabled {
            config.cache.enabled = Some(v);
        }
        if let Some(v) = cli.window {
            config.analysis.window = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

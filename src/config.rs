//! Configuration file support for pip-via.
//!
//! Provides YAML-based configuration through `pip-via.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::requirements_analysis::domain::canonical_name;
use crate::shared::error::ViaError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pip-via.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub exclude: Option<Vec<String>>,
    /// Package name -> lowest acceptable pinned version
    pub minimum_versions: Option<BTreeMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid (empty) config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref exclude) = config.exclude {
        if let Some(i) = exclude.iter().position(|p| p.trim().is_empty()) {
            return Err(ViaError::Validation {
                message: format!(
                    "Invalid config: exclude[{}] must not be empty.\n\n\
                     💡 Hint: Remove the entry or give a package name pattern (e.g., \"pytest-*\").",
                    i
                ),
            }
            .into());
        }
    }

    if let Some(ref minimums) = config.minimum_versions {
        if let Some((package, _)) = minimums.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ViaError::Validation {
                message: format!(
                    "Invalid config: minimum_versions.{} must not be empty.\n\n\
                     💡 Hint: Give a dotted numeric version (e.g., \"2.0.7\").",
                    package
                ),
            }
            .into());
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Options after combining the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub format: OutputFormat,
    pub exclude: Vec<String>,
    pub minimum_versions: BTreeMap<String, String>,
}

impl EffectiveOptions {
    /// CLI values win over config values. Exclude lists are concatenated
    /// (config first); a CLI minimum replaces the config minimum for the
    /// same package under any spelling of its name.
    pub fn merge(
        config: Option<ConfigFile>,
        cli_format: Option<OutputFormat>,
        cli_exclude: Vec<String>,
        cli_minimums: Vec<(String, String)>,
    ) -> Self {
        let config = config.unwrap_or_default();

        let mut exclude = config.exclude.unwrap_or_default();
        for pattern in cli_exclude {
            if !exclude.contains(&pattern) {
                exclude.push(pattern);
            }
        }

        let mut minimum_versions = config.minimum_versions.unwrap_or_default();
        for (package, version) in cli_minimums {
            let canonical = canonical_name(&package);
            minimum_versions.retain(|name, _| canonical_name(name) != canonical);
            minimum_versions.insert(package, version);
        }

        Self {
            format: cli_format.or(config.format).unwrap_or_default(),
            exclude,
            minimum_versions,
        }
    }
}

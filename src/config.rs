//! Configuration file support for pkgsync.
//!
//! Provides YAML-based configuration through `pkgsync.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkgsync.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory names skipped while scanning, merged with `--omit`
    pub omit: Option<Vec<String>>,
    pub format: Option<String>,
    pub include_dev_dependencies: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured report format, if any.
    ///
    /// The value has already been validated by the loader.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

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

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Explicit `--config` wins; otherwise look in the working directory.
pub fn resolve_config(explicit: Option<&Path>, working_dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(working_dir)?.unwrap_or_default()),
    }
}

/// Config entries first, then command-line entries; duplicates are harmless.
pub fn merge_omit(config: &ConfigFile, cli_omit: &[String]) -> Vec<String> {
    config
        .omit
        .iter()
        .flatten()
        .chain(cli_omit.iter())
        .cloned()
        .collect()
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}\n\n💡 Hint: Set 'format' to \"table\" or \"json\".", e);
        }
    }

    if let Some(ref omit) = config.omit {
        for (i, entry) in omit.iter().enumerate() {
            if entry.trim().is_empty() {
                bail!(
                    "Invalid config: omit[{}] must not be empty.\n\n\
                     💡 Hint: Each omit entry is a directory name (e.g., \"vendor\").",
                    i
                );
            }
            if entry.contains('/') || entry.contains('\\') {
                bail!(
                    "Invalid config: omit[{}] '{}' contains a path separator.\n\n\
                     💡 Hint: Omit entries match a single directory name, not a path.",
                    i,
                    entry
                );
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

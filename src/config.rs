//! Settings: built-in defaults, optional TOML config, command line overrides.
//!
//! - `default_config_path()` → ~/.polyroot/config.toml
//! - `FileConfig::from_toml_file(path)` → keys from a user file
//! - `Settings::resolve(&cli)` → flags beat the file, the file beats defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::{OutputFormat, PolyrootCli};
use crate::core::float_cmp::{Tolerance, DEFAULT_EPSILON};

pub const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub epsilon: Option<f64>,
    pub precision: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub tolerance: Tolerance,
    pub precision: usize,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            precision: DEFAULT_PRECISION,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &PolyrootCli) -> Result<Self> {
        let file = match resolve_config_path(&cli.config) {
            // An explicitly named file has to exist; the default one is optional.
            Some(p) if cli.config.is_some() || p.exists() => FileConfig::from_toml_file(&p)?,
            _ => FileConfig::default(),
        };
        Self::merge(cli, &file)
    }

    pub fn merge(cli: &PolyrootCli, file: &FileConfig) -> Result<Self> {
        let eps = cli.epsilon.or(file.epsilon).unwrap_or(DEFAULT_EPSILON);
        let tolerance = Tolerance::new(eps)?;
        let precision = cli.precision.or(file.precision).unwrap_or(DEFAULT_PRECISION);
        if precision == 0 {
            anyhow::bail!("precision must be at least 1");
        }
        let format = cli.format.or(file.format).unwrap_or_default();
        Ok(Self { tolerance, precision, format })
    }
}

/// ~/.polyroot/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".polyroot").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

//! Configuration loading for the CLI.

use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use textsift_extractor::PipelineConfig;
use tracing::debug;

/// Get the default configuration file path (`~/.textsift/config.toml`).
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".textsift").join("config.toml"))
}

/// Load the pipeline configuration.
///
/// An explicit path must exist. Without one, the default path is used if a
/// file is there, and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<PipelineConfig> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    match default_path() {
        Some(path) if path.exists() => load_file(&path),
        _ => {
            debug!("No configuration file, using defaults");
            Ok(PipelineConfig::default())
        }
    }
}

/// Load and validate a configuration file.
pub fn load_file(path: &Path) -> Result<PipelineConfig> {
    debug!("Loading configuration from {}", path.display());

    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let config = PipelineConfig::from_toml(&contents)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    config
        .validate()
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;

    Ok(config)
}

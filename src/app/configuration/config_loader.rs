//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::domain::ChuzapathConfig;
use crate::domain::configuration::parse::parse_config_content;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chuzapath.toml";

/// Load configuration from `path`, or from `chuzapath.toml` if it exists.
///
/// An explicit path must exist; the implicit default may be absent.
pub fn load_config(path: Option<&Path>) -> Result<ChuzapathConfig, AppError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if explicit {
            return Err(AppError::ConfigFileNotFound(path.display().to_string()));
        }
        debug!("no config file, using defaults");
        return Ok(ChuzapathConfig::default());
    }

    debug!(path = %path.display(), "loading config file");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

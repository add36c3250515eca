//! Configuration file discovery and loading.

use anyhow::Context;

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Location of the optional config file, relative to the root directory.
pub const CONFIG_RELATIVE_PATH: &str = ".toga/setup.yml";

/// Path of the config file for `root`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_RELATIVE_PATH)
}

/// Load the config for `root`, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid,
/// `ConfigValidationError` if a value is unusable, and `Other` if the file
/// exists but cannot be read.
pub fn load_config(root: &Path) -> Result<SetupConfig> {
    let path = config_path(root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(SetupConfig::default());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config at {}", path.display()))
                .map_err(SetupError::from);
        }
    };

    let config = parse_config(&content, &path)?;
    validate(&config)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse YAML content into `SetupConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Validate a parsed configuration.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let fields = [
        ("python", &config.python),
        ("git", &config.git),
        ("make", &config.make),
        ("cc", &config.cc),
        ("cesar_repository", &config.cesar_repository),
        ("cesar_dir", &config.cesar_dir),
    ];
    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(SetupError::ConfigValidationError {
                message: format!("'{}' must not be empty", key),
            });
        }
    }

    let mut components = Path::new(&config.cesar_dir).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(SetupError::ConfigValidationError {
            message: format!(
                "'cesar_dir' must be a single directory name, got '{}'",
                config.cesar_dir
            ),
        }),
    }
}

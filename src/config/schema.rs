//! Configuration schema for `.toga/setup.yml`.
//!
//! Every key is optional; an absent file or key means the stock value
//! used by a plain TOGA checkout.

use serde::{Deserialize, Serialize};

/// Default CESAR 2.0 source repository.
pub const DEFAULT_CESAR_REPOSITORY: &str = "https://github.com/hillerlab/CESAR2.0/";

/// Default directory the CESAR repository is cloned into.
pub const DEFAULT_CESAR_DIR: &str = "CESAR2.0";

/// Tool overrides for the setup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Python interpreter used to run `pip`.
    pub python: String,

    /// Version-control client used to clone CESAR.
    pub git: String,

    /// Build tool run inside the CESAR checkout.
    pub make: String,

    /// C compiler for the native modules.
    pub cc: String,

    /// CESAR source repository URL.
    pub cesar_repository: String,

    /// Directory (relative to the working directory) for the CESAR clone.
    pub cesar_dir: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            git: "git".to_string(),
            make: "make".to_string(),
            cc: "gcc".to_string(),
            cesar_repository: DEFAULT_CESAR_REPOSITORY.to_string(),
            cesar_dir: DEFAULT_CESAR_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_checkout() {
        let config = SetupConfig::default();
        assert_eq!(config.python, "python3");
        assert_eq!(config.git, "git");
        assert_eq!(config.make, "make");
        assert_eq!(config.cc, "gcc");
        assert_eq!(config.cesar_repository, DEFAULT_CESAR_REPOSITORY);
        assert_eq!(config.cesar_dir, "CESAR2.0");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: SetupConfig = serde_yaml::from_str("cc: clang\n").unwrap();
        assert_eq!(config.cc, "clang");
        assert_eq!(config.python, "python3");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<SetupConfig, _> = serde_yaml::from_str("cflags: -O3\n");
        assert!(result.is_err());
    }
}

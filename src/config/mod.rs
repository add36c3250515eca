//! Configuration loading and the filesystem layout.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//! - Fixed artifact locations in [`layout`]
//!
//! # Example
//!
//! ```
//! use toga_setup::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".toga")).unwrap();
//! fs::write(temp.path().join(".toga/setup.yml"), "cc: clang").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.cc, "clang");
//! assert_eq!(config.python, "python3");
//! ```

pub mod layout;
pub mod loader;
pub mod schema;

pub use layout::Layout;
pub use loader::{config_path, load_config, parse_config, validate, CONFIG_RELATIVE_PATH};
pub use schema::SetupConfig;

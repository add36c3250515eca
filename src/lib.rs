//! toga-setup - Environment bootstrap for the TOGA pipeline.
//!
//! Brings a fresh checkout to a runnable state in four stages, always in
//! this order:
//!
//! 1. install the Python requirements with pip
//! 2. train the exon models unless one already exists
//! 3. clone and build CESAR 2.0 unless the `cesar` wrapper exists
//! 4. compile the native C helpers under `modules/`
//!
//! Only a failed Python install changes the exit status (see
//! [`runner::StatusPolicy`]).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional tool overrides and the checkout layout
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Stage sequencing and aggregate status
//! - [`shell`] - External process execution
//! - [`steps`] - The four provisioning stages
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use toga_setup::config::{Layout, SetupConfig};
//! use toga_setup::runner::{RunOptions, SetupRunner};
//! use toga_setup::shell::RecordingRunner;
//! use toga_setup::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let layout = Layout::single(temp.path());
//! let config = SetupConfig::default();
//! let mut runner = RecordingRunner::new();
//! let mut ui = MockUI::new();
//!
//! let result = SetupRunner::new(&layout, &config)
//!     .run(&RunOptions::default(), &mut runner, &mut ui);
//! assert_eq!(result.exit_code(), 0);
//! assert!(ui.has_success("CESAR installed"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SetupError};

//! External process execution.

pub mod command;
pub mod mock;

pub use command::{CommandRunner, DryRunRunner, Invocation, ProcessOutcome, SystemRunner};
pub use mock::RecordingRunner;

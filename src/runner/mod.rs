//! Stage sequencing and exit status.

pub mod status;
pub mod workflow;

pub use status::{AggregateStatus, StatusPolicy};
pub use workflow::{RunOptions, SetupResult, SetupRunner};

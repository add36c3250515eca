//! Provisioning stages.
//!
//! Four stages run in fixed order, each in its own module:
//! [`dependencies`], [`model`], [`cesar`] and [`native`]. They share the
//! precondition checks in [`completed_check`] and the plumbing in
//! [`executor`].

pub mod cesar;
pub mod completed_check;
pub mod dependencies;
pub mod executor;
pub mod model;
pub mod native;
pub mod wrapper;

pub use completed_check::{check_any_file, check_file, file_exists, first_existing, CheckResult};
pub use executor::{Stage, StageAction, StageContext, StageReport};
pub use native::{NativeUnit, UnitKind, NATIVE_UNITS};
pub use wrapper::{make_executable, render_wrapper, write_wrapper};

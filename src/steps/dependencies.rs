//! Python dependency installation.
//!
//! The only stage whose failure reaches the exit status. A failure is
//! diagnosed on stderr and the run carries on, since the later stages do not
//! need the Python environment.

use crate::config::{Layout, SetupConfig};
use crate::shell::Invocation;

use super::executor::{Stage, StageContext, StageReport};

/// Printed when pip succeeds.
pub const INSTALLED_MSG: &str = "Python packages installed";

/// First diagnostic line on failure.
pub const FAILED_MSG: &str = "Failed to install Python packages";

/// Second diagnostic line on failure: the usual root cause.
pub const FAILED_HINT: &str =
    "Hint: the mysqlclient package needs the MySQL client library (e.g. libmysqlclient-dev) to build";

/// `python3 -m pip install --user -r <root>/requirements.txt`, run from the root.
///
/// `--user` keeps the install in the invoking user's site-packages; nothing
/// is elevated.
pub fn install_invocation(layout: &Layout, config: &SetupConfig) -> Invocation {
    Invocation::new(&config.python, layout.root())
        .args(["-m", "pip", "install", "--user", "-r"])
        .arg(layout.requirements().to_string_lossy())
}

/// Install the Python requirements.
pub fn run(ctx: &mut StageContext<'_>) -> StageReport {
    let invocation = install_invocation(ctx.layout, ctx.config);
    let outcome = ctx.run(&invocation);

    if outcome.success() {
        ctx.ui.success(INSTALLED_MSG);
    } else {
        tracing::debug!("{} failed: {}", invocation, outcome);
        ctx.ui.error(FAILED_MSG);
        ctx.ui.error(FAILED_HINT);
    }

    let mut report = StageReport::ran(Stage::Dependencies);
    report.record(invocation, outcome);
    report
}

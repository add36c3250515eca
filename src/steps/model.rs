//! Model provisioning.
//!
//! Either trained model is enough. When both are missing the training
//! script is run once; its exit status is not inspected.

use crate::config::Layout;
use crate::shell::Invocation;

use super::completed_check::check_any_file;
use super::executor::{Stage, StageContext, StageReport};

/// Printed when a model already exists.
pub const FOUND_MSG: &str = "Model found";

/// Printed after the training script returns.
pub const CREATED_MSG: &str = "Model created";

/// The training entry point, run with no arguments from the root.
pub fn train_invocation(layout: &Layout) -> Invocation {
    Invocation::new(layout.train_script().to_string_lossy(), layout.root())
}

/// Ensure a model artifact exists.
pub fn run(ctx: &mut StageContext<'_>) -> StageReport {
    let check = check_any_file(&ctx.layout.model_candidates());
    if check.complete {
        tracing::debug!("Skipping training: {}", check.description);
        ctx.ui.success(FOUND_MSG);
        return StageReport::skipped(Stage::Model, check.description);
    }

    tracing::info!("No model found, training");
    let invocation = train_invocation(ctx.layout);
    let outcome = ctx.run(&invocation);
    // Training is trusted to produce the models.
    outcome.ignore(&invocation);
    ctx.ui.success(CREATED_MSG);

    let mut report = StageReport::ran(Stage::Model);
    report.record(invocation, outcome);
    report
}

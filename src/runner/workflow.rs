//! Setup orchestration.
//!
//! Runs the four stages strictly in order. No stage failure stops the run.

use std::time::{Duration, Instant};

use crate::config::{Layout, SetupConfig};
use crate::shell::CommandRunner;
use crate::steps::{cesar, dependencies, model, native, StageContext, StageReport};
use crate::ui::UserInterface;

use super::status::{AggregateStatus, StatusPolicy};

/// Options for a setup run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Which stage failures affect the exit status.
    pub policy: StatusPolicy,
    /// Skip the orchestrator's own filesystem writes.
    pub dry_run: bool,
}

/// Result of a setup run.
#[derive(Debug)]
pub struct SetupResult {
    /// One report per stage, in execution order.
    pub reports: Vec<StageReport>,
    /// Aggregate status under the run's policy.
    pub status: AggregateStatus,
    /// Total duration.
    pub duration: Duration,
}

impl SetupResult {
    /// Process exit code.
    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }
}

/// Orchestrates a setup run.
pub struct SetupRunner<'a> {
    layout: &'a Layout,
    config: &'a SetupConfig,
}

impl<'a> SetupRunner<'a> {
    /// Create a runner for a layout and config.
    pub fn new(layout: &'a Layout, config: &'a SetupConfig) -> Self {
        Self { layout, config }
    }

    /// Run every stage.
    pub fn run(
        &self,
        options: &RunOptions,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> SetupResult {
        let start = Instant::now();
        let mut ctx = StageContext {
            layout: self.layout,
            config: self.config,
            runner,
            ui,
            dry_run: options.dry_run,
        };

        let mut status = AggregateStatus::new();
        let mut reports = Vec::with_capacity(4);

        let report = dependencies::run(&mut ctx);
        finish_stage(&mut status, &mut reports, report, options.policy);

        let report = model::run(&mut ctx);
        finish_stage(&mut status, &mut reports, report, options.policy);

        let report = cesar::run(&mut ctx);
        finish_stage(&mut status, &mut reports, report, options.policy);

        let report = native::run(&mut ctx);
        finish_stage(&mut status, &mut reports, report, options.policy);

        tracing::info!("Setup finished with status {}", status.code());
        SetupResult {
            reports,
            status,
            duration: start.elapsed(),
        }
    }
}

fn finish_stage(
    status: &mut AggregateStatus,
    reports: &mut Vec<StageReport>,
    report: StageReport,
    policy: StatusPolicy,
) {
    tracing::info!(
        "{} stage {}",
        report.stage,
        if report.was_skipped() { "skipped" } else { "ran" }
    );
    status.absorb(&report, policy);
    reports.push(report);
}

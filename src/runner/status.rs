//! Aggregate exit status.
//!
//! By default only the dependencies stage can fail a run; every other
//! stage's outcome is recorded but does not change the exit code. The
//! `--strict` policy widens that to all stages.

use crate::steps::{Stage, StageReport};

/// Which stages may fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Only a failed dependency install sets status 1.
    #[default]
    DependenciesOnly,
    /// Any non-successful invocation sets status 1.
    AllStages,
}

impl StatusPolicy {
    /// Whether a failure in `stage` counts toward the exit status.
    pub fn counts(&self, stage: Stage) -> bool {
        match self {
            StatusPolicy::DependenciesOnly => stage == Stage::Dependencies,
            StatusPolicy::AllStages => true,
        }
    }
}

/// The run's exit status: 0 until a counted stage fails, then 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateStatus {
    failed: bool,
}

impl AggregateStatus {
    /// A fresh, successful status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a stage report into the status under `policy`.
    ///
    /// Once failed, the status stays failed.
    pub fn absorb(&mut self, report: &StageReport, policy: StatusPolicy) {
        if policy.counts(report.stage) && !report.all_succeeded() {
            tracing::debug!("{} stage marks the run as failed", report.stage);
            self.failed = true;
        }
    }

    /// Whether no counted stage failed.
    pub fn is_success(&self) -> bool {
        !self.failed
    }

    /// Process exit code: 0 or 1.
    pub fn code(&self) -> i32 {
        if self.failed {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{Invocation, ProcessOutcome};

    fn report(stage: Stage, outcome: ProcessOutcome) -> StageReport {
        let mut report = StageReport::ran(stage);
        report.record(Invocation::new("tool", "/"), outcome);
        report
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(AggregateStatus::new().code(), 0);
    }

    #[test]
    fn dependency_failure_sets_one() {
        let mut status = AggregateStatus::new();
        status.absorb(
            &report(Stage::Dependencies, ProcessOutcome::Failed { code: Some(1) }),
            StatusPolicy::DependenciesOnly,
        );
        assert_eq!(status.code(), 1);
        assert!(!status.is_success());
    }

    #[test]
    fn later_failures_are_ignored_by_default() {
        let mut status = AggregateStatus::new();
        for stage in [Stage::Model, Stage::Cesar, Stage::NativeModules] {
            status.absorb(
                &report(stage, ProcessOutcome::Failed { code: Some(2) }),
                StatusPolicy::DependenciesOnly,
            );
        }
        assert_eq!(status.code(), 0);
    }

    #[test]
    fn strict_policy_counts_every_stage() {
        let mut status = AggregateStatus::new();
        status.absorb(
            &report(
                Stage::NativeModules,
                ProcessOutcome::NotStarted {
                    reason: "gcc: not found".into(),
                },
            ),
            StatusPolicy::AllStages,
        );
        assert_eq!(status.code(), 1);
    }

    #[test]
    fn failure_is_sticky() {
        let mut status = AggregateStatus::new();
        status.absorb(
            &report(Stage::Dependencies, ProcessOutcome::Failed { code: Some(1) }),
            StatusPolicy::DependenciesOnly,
        );
        status.absorb(
            &report(Stage::Dependencies, ProcessOutcome::Success),
            StatusPolicy::DependenciesOnly,
        );
        assert_eq!(status.code(), 1);
    }

    #[test]
    fn skipped_stage_never_fails() {
        let mut status = AggregateStatus::new();
        status.absorb(
            &StageReport::skipped(Stage::Model, "found"),
            StatusPolicy::AllStages,
        );
        assert!(status.is_success());
    }
}

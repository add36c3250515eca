//! Shared stage plumbing.
//!
//! Each stage receives a [`StageContext`] and hands back a [`StageReport`]
//! recording whether it acted and how every invocation it made turned out.

use std::fmt;

use crate::config::{Layout, SetupConfig};
use crate::shell::{CommandRunner, Invocation, ProcessOutcome};
use crate::ui::UserInterface;

/// The provisioning stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Python package installation.
    Dependencies,
    /// Model artifact materialization.
    Model,
    /// CESAR clone, build and wrapper generation.
    Cesar,
    /// Native C module compilation.
    NativeModules,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 4] = [
        Stage::Dependencies,
        Stage::Model,
        Stage::Cesar,
        Stage::NativeModules,
    ];

    /// Human-readable stage name.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Dependencies => "Python packages",
            Stage::Model => "Models",
            Stage::Cesar => "CESAR",
            Stage::NativeModules => "Native modules",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Dependencies => "dependencies",
            Stage::Model => "model",
            Stage::Cesar => "cesar",
            Stage::NativeModules => "native-modules",
        };
        write!(f, "{}", s)
    }
}

/// Whether a stage did work or found it already done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageAction {
    /// The precondition held; nothing was run.
    Skipped { reason: String },
    /// The stage invoked its collaborators.
    Ran,
}

/// Outcome of running one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Which stage this is.
    pub stage: Stage,

    /// Whether the stage acted.
    pub action: StageAction,

    /// Every invocation the stage made, with its outcome, in order.
    pub invocations: Vec<(Invocation, ProcessOutcome)>,

    /// Failures of the stage's own work (not of a child process).
    pub errors: Vec<String>,
}

impl StageReport {
    /// A stage whose precondition was already satisfied.
    pub fn skipped(stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            stage,
            action: StageAction::Skipped {
                reason: reason.into(),
            },
            invocations: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// A stage that ran; invocations are added with [`record`](Self::record).
    pub fn ran(stage: Stage) -> Self {
        Self {
            stage,
            action: StageAction::Ran,
            invocations: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Append an invocation and its outcome.
    pub fn record(&mut self, invocation: Invocation, outcome: ProcessOutcome) {
        self.invocations.push((invocation, outcome));
    }

    /// Note a failure that did not come from a child process.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Whether the stage was skipped.
    pub fn was_skipped(&self) -> bool {
        matches!(self.action, StageAction::Skipped { .. })
    }

    /// Whether every invocation exited 0 and nothing else went wrong
    /// (trivially true when skipped).
    pub fn all_succeeded(&self) -> bool {
        self.errors.is_empty() && self.invocations.iter().all(|(_, outcome)| outcome.success())
    }

    /// Invocations that did not succeed.
    pub fn failures(&self) -> impl Iterator<Item = &(Invocation, ProcessOutcome)> {
        self.invocations.iter().filter(|(_, o)| !o.success())
    }
}

/// Everything a stage needs to do its work.
pub struct StageContext<'a> {
    /// Resolved directories.
    pub layout: &'a Layout,

    /// Tool overrides.
    pub config: &'a SetupConfig,

    /// Process execution seam.
    pub runner: &'a mut dyn CommandRunner,

    /// Output sink.
    pub ui: &'a mut dyn UserInterface,

    /// Skip filesystem writes made by the orchestrator itself.
    pub dry_run: bool,
}

impl StageContext<'_> {
    /// Run an invocation through the context's runner.
    pub fn run(&mut self, invocation: &Invocation) -> ProcessOutcome {
        self.runner.run(invocation)
    }
}

//! External command invocation.
//!
//! Every collaborator (pip, the model trainer, git, make, gcc) is reached
//! through a [`CommandRunner`]. Runners never fail: whatever happens to the
//! child process is reported as a [`ProcessOutcome`] and the calling stage
//! decides what it means.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

use crate::ui::OutputMode;

/// A fully resolved external command: program, arguments and working directory.
///
/// Arguments are passed to the program as-is; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name (looked up on `PATH`) or path to an executable.
    pub program: String,

    /// Arguments in order.
    pub args: Vec<String>,

    /// Working directory for the child process.
    pub cwd: PathBuf,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What happened to an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exited with status 0.
    Success,

    /// Ran and exited non-zero (`None` if killed by a signal).
    Failed { code: Option<i32> },

    /// The process could not be started at all.
    NotStarted { reason: String },
}

impl ProcessOutcome {
    /// Build an outcome from a finished child's exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            Self::Success
        } else {
            Self::Failed {
                code: status.code(),
            }
        }
    }

    /// Whether the command ran and exited 0.
    pub fn success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Exit code, if the process ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Success => Some(0),
            Self::Failed { code } => *code,
            Self::NotStarted { .. } => None,
        }
    }

    /// Record that the caller deliberately does not act on this outcome.
    ///
    /// Non-successful outcomes are logged at `warn` so that a swallowed
    /// failure still leaves a trace.
    pub fn ignore(&self, invocation: &Invocation) {
        match self {
            Self::Success => {
                tracing::debug!("{} succeeded", invocation.program);
            }
            Self::Failed { code } => {
                tracing::warn!(
                    "{} exited with {:?}; continuing without checking",
                    invocation,
                    code
                );
            }
            Self::NotStarted { reason } => {
                tracing::warn!("{} could not start ({}); continuing", invocation, reason);
            }
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "exit 0"),
            Self::Failed { code: Some(code) } => write!(f, "exit {}", code),
            Self::Failed { code: None } => write!(f, "killed by signal"),
            Self::NotStarted { reason } => write!(f, "not started: {}", reason),
        }
    }
}

/// Executes invocations.
///
/// This trait is the seam between stage logic and the operating system;
/// tests swap in [`RecordingRunner`](super::RecordingRunner).
pub trait CommandRunner {
    /// Run the invocation to completion and report its outcome.
    fn run(&mut self, invocation: &Invocation) -> ProcessOutcome;
}

/// Runs invocations as real child processes.
///
/// Each call blocks until the child exits. There is no timeout: a hung
/// collaborator hangs the run.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner {
    mode: OutputMode,
}

impl SystemRunner {
    /// Create a runner whose child stdio follows the output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(OutputMode::Normal)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> ProcessOutcome {
        if self.mode.shows_command_output() {
            eprintln!("$ {}", invocation);
        }
        tracing::debug!("Running {} in {}", invocation, invocation.cwd.display());

        let start = Instant::now();
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd.current_dir(&invocation.cwd);
        cmd.stdin(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        if self.mode.shows_status() {
            cmd.stdout(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null());
        }

        let outcome = match cmd.status() {
            Ok(status) => ProcessOutcome::from_status(status),
            Err(e) => ProcessOutcome::NotStarted {
                reason: e.to_string(),
            },
        };

        tracing::debug!(
            "{} finished in {:?}: {}",
            invocation.program,
            start.elapsed(),
            outcome
        );
        outcome
    }
}

/// Prints invocations instead of running them.
///
/// Every invocation is reported as successful so the run proceeds through
/// all stages. Nothing is printed in quiet mode.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    mode: OutputMode,
    planned: Vec<Invocation>,
}

impl DryRunRunner {
    /// Create an empty dry-run runner that prints according to `mode`.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            planned: Vec::new(),
        }
    }

    /// Invocations that would have been run, in order.
    pub fn planned(&self) -> &[Invocation] {
        &self.planned
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&mut self, invocation: &Invocation) -> ProcessOutcome {
        if self.mode.shows_status() {
            println!("  would run: {}  (in {})", invocation, invocation.cwd.display());
        }
        self.planned.push(invocation.clone());
        ProcessOutcome::Success
    }
}

//! Scripted command runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without spawning anything.
//! Every invocation is captured for later assertion, and outcomes can be
//! scripted per program.
//!
//! # Example
//!
//! ```
//! use toga_setup::shell::{CommandRunner, Invocation, ProcessOutcome, RecordingRunner};
//!
//! let mut runner = RecordingRunner::new();
//! runner.set_exit_code("python3", 1);
//!
//! let outcome = runner.run(&Invocation::new("python3", "/repo").args(["-m", "pip"]));
//! assert_eq!(outcome, ProcessOutcome::Failed { code: Some(1) });
//! assert_eq!(runner.programs(), vec!["python3"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::command::{CommandRunner, Invocation, ProcessOutcome};

/// Callback run against each invocation before its outcome is returned.
pub type SideEffect = Box<dyn Fn(&Invocation)>;

/// Test double that records invocations and returns scripted outcomes.
///
/// Programs are matched by file name, so `"/repo/train_model.py"` can be
/// scripted as `"train_model.py"`. Unscripted programs succeed.
#[derive(Default)]
pub struct RecordingRunner {
    invocations: Vec<Invocation>,
    exit_codes: HashMap<String, i32>,
    unstartable: HashSet<String>,
    side_effect: Option<SideEffect>,
}

impl RecordingRunner {
    /// Create a runner where every program succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with `code`.
    pub fn set_exit_code(&mut self, program: &str, code: i32) {
        self.exit_codes.insert(program.to_string(), code);
    }

    /// Make `program` fail to start, as if it were missing from `PATH`.
    pub fn set_unstartable(&mut self, program: &str) {
        self.unstartable.insert(program.to_string());
    }

    /// Run `effect` for every invocation (e.g. to create the files a real
    /// collaborator would produce).
    pub fn on_run(&mut self, effect: impl Fn(&Invocation) + 'static) {
        self.side_effect = Some(Box::new(effect));
    }

    /// All captured invocations, in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Program names of captured invocations, in order.
    pub fn programs(&self) -> Vec<&str> {
        self.invocations
            .iter()
            .map(|i| program_key(&i.program))
            .collect()
    }

    /// Whether any invocation ran `program`.
    pub fn ran(&self, program: &str) -> bool {
        self.programs().contains(&program)
    }

    /// Number of invocations of `program`.
    pub fn count(&self, program: &str) -> usize {
        self.programs().iter().filter(|p| **p == program).count()
    }

    /// Forget captured invocations, keeping the script.
    pub fn clear(&mut self) {
        self.invocations.clear();
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("invocations", &self.invocations)
            .field("exit_codes", &self.exit_codes)
            .field("unstartable", &self.unstartable)
            .finish_non_exhaustive()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> ProcessOutcome {
        self.invocations.push(invocation.clone());
        let key = program_key(&invocation.program);

        if self.unstartable.contains(key) {
            return ProcessOutcome::NotStarted {
                reason: format!("{}: not found", key),
            };
        }
        if let Some(effect) = &self.side_effect {
            effect(invocation);
        }
        match self.exit_codes.get(key) {
            Some(0) | None => ProcessOutcome::Success,
            Some(code) => ProcessOutcome::Failed { code: Some(*code) },
        }
    }
}

fn program_key(program: &str) -> &str {
    Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn unscripted_programs_succeed() {
        let mut runner = RecordingRunner::new();
        assert!(runner.run(&Invocation::new("make", "/w")).success());
    }

    #[test]
    fn scripted_exit_code_is_returned() {
        let mut runner = RecordingRunner::new();
        runner.set_exit_code("git", 128);
        let outcome = runner.run(&Invocation::new("git", "/w"));
        assert_eq!(outcome, ProcessOutcome::Failed { code: Some(128) });
    }

    #[test]
    fn scripted_zero_is_success() {
        let mut runner = RecordingRunner::new();
        runner.set_exit_code("git", 0);
        assert!(runner.run(&Invocation::new("git", "/w")).success());
    }

    #[test]
    fn unstartable_program_reports_not_started() {
        let mut runner = RecordingRunner::new();
        runner.set_unstartable("gcc");
        let outcome = runner.run(&Invocation::new("gcc", "/w"));
        assert!(matches!(outcome, ProcessOutcome::NotStarted { .. }));
        assert_eq!(runner.count("gcc"), 1);
    }

    #[test]
    fn programs_are_matched_by_file_name() {
        let mut runner = RecordingRunner::new();
        runner.set_exit_code("train_model.py", 2);
        let outcome = runner.run(&Invocation::new("/repo/train_model.py", "/repo"));
        assert_eq!(outcome, ProcessOutcome::Failed { code: Some(2) });
        assert!(runner.ran("train_model.py"));
    }

    #[test]
    fn side_effect_runs_per_invocation() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut runner = RecordingRunner::new();
        runner.on_run(move |_| seen.set(seen.get() + 1));

        runner.run(&Invocation::new("make", "/w"));
        runner.run(&Invocation::new("gcc", "/w"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn clear_forgets_invocations() {
        let mut runner = RecordingRunner::new();
        runner.run(&Invocation::new("make", "/w"));
        runner.clear();
        assert!(runner.invocations().is_empty());
    }
}

//! CESAR acquisition and build.
//!
//! The `cesar` wrapper in the working directory marks the tool as installed.
//! When it is missing: clone, build inside the checkout, then write the
//! wrapper and make it executable. Clone and build outcomes are not checked;
//! a failed build leaves a wrapper pointing at a missing binary. A wrapper
//! that cannot be written is reported as a warning and the run continues.

use crate::config::{Layout, SetupConfig};
use crate::shell::Invocation;

use super::completed_check::check_file;
use super::executor::{Stage, StageContext, StageReport};
use super::wrapper::{make_executable, render_wrapper, write_wrapper};

/// Printed when the wrapper already exists.
pub const FOUND_MSG: &str = "CESAR found";

/// Printed after the wrapper has been generated.
pub const INSTALLED_MSG: &str = "CESAR installed";

/// `git clone <repository> <cesar_dir>`, run from the working directory.
pub fn clone_invocation(layout: &Layout, config: &SetupConfig) -> Invocation {
    Invocation::new(&config.git, layout.work_dir()).args([
        "clone",
        config.cesar_repository.as_str(),
        config.cesar_dir.as_str(),
    ])
}

/// `make`, run inside the checkout.
pub fn build_invocation(layout: &Layout, config: &SetupConfig) -> Invocation {
    Invocation::new(&config.make, layout.cesar_checkout(config))
}

/// Ensure the `cesar` wrapper exists.
pub fn run(ctx: &mut StageContext<'_>) -> StageReport {
    let wrapper = ctx.layout.wrapper();
    let check = check_file(&wrapper);
    if check.complete {
        tracing::debug!("Skipping CESAR build: {}", check.description);
        ctx.ui.success(FOUND_MSG);
        return StageReport::skipped(Stage::Cesar, check.description);
    }

    let mut report = StageReport::ran(Stage::Cesar);

    let clone = clone_invocation(ctx.layout, ctx.config);
    let outcome = ctx.run(&clone);
    outcome.ignore(&clone);
    report.record(clone, outcome);

    let build = build_invocation(ctx.layout, ctx.config);
    let outcome = ctx.run(&build);
    outcome.ignore(&build);
    report.record(build, outcome);

    let content = render_wrapper(&ctx.config.cesar_dir);
    if ctx.dry_run {
        ctx.ui.message(&format!("  would write: {}", wrapper.display()));
    } else {
        match write_wrapper(&wrapper, &content).and_then(|()| make_executable(&wrapper)) {
            Ok(()) => tracing::debug!("Wrote {}", wrapper.display()),
            Err(e) => {
                tracing::warn!("{}; continuing", e);
                ctx.ui.warning(&e.to_string());
                report.record_error(e.to_string());
            }
        }
    }

    ctx.ui.success(INSTALLED_MSG);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run_in(
        layout: &Layout,
        runner: &mut RecordingRunner,
        ui: &mut MockUI,
        dry_run: bool,
    ) -> StageReport {
        let config = SetupConfig::default();
        let mut ctx = StageContext {
            layout,
            config: &config,
            runner,
            ui,
            dry_run,
        };
        run(&mut ctx)
    }

    #[test]
    fn clone_invocation_targets_checkout_dir() {
        let layout = Layout::single("/work");
        let inv = clone_invocation(&layout, &SetupConfig::default());
        assert_eq!(
            inv.to_string(),
            "git clone https://github.com/hillerlab/CESAR2.0/ CESAR2.0"
        );
        assert_eq!(inv.cwd, std::path::PathBuf::from("/work"));
    }

    #[test]
    fn build_runs_inside_checkout() {
        let layout = Layout::single("/work");
        let inv = build_invocation(&layout, &SetupConfig::default());
        assert_eq!(inv.to_string(), "make");
        assert_eq!(inv.cwd, std::path::PathBuf::from("/work/CESAR2.0"));
    }

    #[test]
    fn existing_wrapper_skips_everything() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cesar"), "#!/bin/sh\n").unwrap();
        let layout = Layout::single(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let report = run_in(&layout, &mut runner, &mut ui, false);

        assert!(report.was_skipped());
        assert!(runner.invocations().is_empty());
        assert!(ui.has_success(FOUND_MSG));
        assert_eq!(
            fs::read_to_string(temp.path().join("cesar")).unwrap(),
            "#!/bin/sh\n"
        );
    }

    #[test]
    fn missing_wrapper_clones_builds_and_writes() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::single(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let report = run_in(&layout, &mut runner, &mut ui, false);

        assert_eq!(runner.programs(), vec!["git", "make"]);
        assert_eq!(report.invocations.len(), 2);
        let content = fs::read_to_string(temp.path().join("cesar")).unwrap();
        assert_eq!(content, render_wrapper("CESAR2.0"));
        assert!(ui.has_success(INSTALLED_MSG));
    }

    #[test]
    fn clone_failure_still_writes_wrapper() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::single(temp.path());
        let mut runner = RecordingRunner::new();
        runner.set_exit_code("git", 128);
        runner.set_unstartable("make");
        let mut ui = MockUI::new();

        let report = run_in(&layout, &mut runner, &mut ui, false);

        assert_eq!(report.failures().count(), 2);
        assert!(temp.path().join("cesar").is_file());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::single(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        run_in(&layout, &mut runner, &mut ui, true);

        assert!(!temp.path().join("cesar").exists());
        assert_eq!(runner.programs(), vec!["git", "make"]);
    }

    #[test]
    fn unwritable_wrapper_is_recorded_not_fatal() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("cesar")).unwrap();
        let layout = Layout::single(temp.path());
        let mut runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let report = run_in(&layout, &mut runner, &mut ui, false);

        assert_eq!(runner.programs(), vec!["git", "make"]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Failed to write wrapper"));
        assert!(!report.all_succeeded());
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.errors().is_empty());
        assert!(ui.has_success(INSTALLED_MSG));
    }
}

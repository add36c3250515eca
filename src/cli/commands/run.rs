//! Run command implementation.
//!
//! `toga-setup run` (or plain `toga-setup`) executes every stage.

use crate::cli::args::RunArgs;
use crate::config::{load_config, Layout};
use crate::error::Result;
use crate::runner::{RunOptions, SetupResult, SetupRunner, StatusPolicy};
use crate::shell::{CommandRunner, DryRunRunner, SystemRunner};
use crate::steps::StageAction;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    layout: Layout,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(layout: &Layout, args: RunArgs) -> Self {
        Self {
            layout: layout.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Build run options from args.
    fn build_options(&self) -> RunOptions {
        RunOptions {
            policy: if self.args.strict {
                StatusPolicy::AllStages
            } else {
                StatusPolicy::DependenciesOnly
            },
            dry_run: self.args.dry_run,
        }
    }

    /// Execute with an explicit command runner.
    pub fn execute_with(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = load_config(self.layout.root())?;
        let options = self.build_options();

        if options.dry_run {
            ui.message("Running in dry-run mode; nothing will be executed.");
        }

        let result = SetupRunner::new(&self.layout, &config).run(&options, runner, ui);

        if ui.output_mode().shows_command_output() {
            show_summary(&result, ui);
        }

        Ok(CommandResult::from_code(result.exit_code()))
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.dry_run {
            let mut runner = DryRunRunner::new(ui.output_mode());
            self.execute_with(&mut runner, ui)
        } else {
            let mut runner = SystemRunner::new(ui.output_mode());
            self.execute_with(&mut runner, ui)
        }
    }
}

fn show_summary(result: &SetupResult, ui: &mut dyn UserInterface) {
    ui.show_header(&format!(
        "Summary ({:.1}s, exit {})",
        result.duration.as_secs_f64(),
        result.exit_code()
    ));
    for report in &result.reports {
        match &report.action {
            StageAction::Skipped { reason } => {
                ui.skipped(&format!("{}: skipped ({})", report.stage.label(), reason));
            }
            StageAction::Ran => {
                for (invocation, outcome) in &report.invocations {
                    let line = format!("{}: {} [{}]", report.stage.label(), invocation, outcome);
                    if outcome.success() {
                        ui.success(&line);
                    } else {
                        ui.warning(&line);
                    }
                }
                for error in &report.errors {
                    ui.warning(&format!("{}: {}", report.stage.label(), error));
                }
            }
        }
    }
}

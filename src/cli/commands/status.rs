//! Status command implementation.
//!
//! `toga-setup status` evaluates every precondition without running
//! anything and reports what a `run` would do.

use crate::config::{load_config, Layout};
use crate::error::Result;
use crate::steps::{check_any_file, check_file, file_exists, NATIVE_UNITS};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    layout: Layout,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.layout.root())?;
        ui.show_header(&format!("TOGA setup status ({})", self.layout.root().display()));

        let requirements = self.layout.requirements();
        if file_exists(&requirements) {
            ui.success("Python packages: requirements.txt present (installed on every run)");
        } else {
            ui.warning(&format!(
                "Python packages: {} is missing; installation will fail",
                requirements.display()
            ));
        }

        let models = check_any_file(&self.layout.model_candidates());
        match &models.found {
            Some(path) => ui.success(&format!("Models: found {}", path.display())),
            None => ui.skipped("Models: missing (run will train)"),
        }

        let wrapper = check_file(&self.layout.wrapper());
        if wrapper.complete {
            ui.success("CESAR: wrapper present");
        } else {
            ui.skipped(&format!(
                "CESAR: wrapper missing (run will clone {} and build)",
                config.cesar_repository
            ));
        }

        let modules_dir = self.layout.modules_dir();
        for unit in &NATIVE_UNITS {
            let line = format!("Native modules: {} (rebuilt on every run)", unit.output_path());
            if file_exists(&modules_dir.join(unit.output)) {
                ui.success(&line);
            } else {
                ui.skipped(&line);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_checkout_reports_everything_missing() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::single(temp.path());
        let mut ui = MockUI::new();

        let result = StatusCommand::new(&layout).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_skipped("Models: missing"));
        assert!(ui.has_skipped("CESAR: wrapper missing"));
        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(ui.skips().len(), 2 + NATIVE_UNITS.len());
    }

    #[test]
    fn prepared_checkout_reports_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "numpy\n").unwrap();
        fs::create_dir_all(temp.path().join("models")).unwrap();
        fs::write(temp.path().join("models/me_model.dat"), "").unwrap();
        fs::write(temp.path().join("cesar"), "").unwrap();
        let layout = Layout::single(temp.path());
        let mut ui = MockUI::new();

        StatusCommand::new(&layout).execute(&mut ui).unwrap();

        assert!(ui.has_success("me_model.dat"));
        assert!(ui.has_success("CESAR: wrapper present"));
        assert!(ui.warnings().is_empty());
    }
}

//! Init command implementation.
//!
//! The `zkwasm init` command creates a new application from the embedded
//! template.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::scaffold::{init_project, EmbeddedTemplate, ProjectScaffolder, TemplateVars};
use crate::ui::{hints, Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    ///
    /// The project is created in a directory named after it under `project_root`.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    fn project_name(&self, ui: &mut dyn UserInterface) -> Result<String> {
        if let Some(name) = &self.args.name {
            return Ok(name.clone());
        }

        let prompt = Prompt {
            key: "project_name".to_string(),
            question: "Project name".to_string(),
            prompt_type: PromptType::Input,
            default: None,
        };
        Ok(ui.prompt(&prompt)?.as_string().trim().to_string())
    }

    /// Ask before writing into a non-empty directory.
    fn confirm_overwrite(&self, ui: &mut dyn UserInterface, target: &Path) -> Result<bool> {
        let occupied = target.is_dir() && std::fs::read_dir(target)?.next().is_some();
        if self.args.force || !occupied || !ui.is_interactive() {
            return Ok(self.args.force);
        }

        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: format!("{} is not empty. Write project files anyway?", target.display()),
            prompt_type: PromptType::Confirm,
            default: Some("no".to_string()),
        };
        Ok(ui.prompt(&prompt)?.as_bool().unwrap_or(false))
    }

    fn run(&self, ui: &mut dyn UserInterface, scaffolder: &dyn ProjectScaffolder) -> Result<CommandResult> {
        let name = self.project_name(ui)?;
        let vars = TemplateVars::new(&name, self.args.description.as_deref());
        let target = self.project_root.join(&name);

        let force = self.confirm_overwrite(ui, &target)?;
        let written = init_project(scaffolder, &target, &vars, force)?;

        ui.success(&format!(
            "Created {} in {} ({} files)",
            name,
            target.display(),
            written.len()
        ));
        if ui.output_mode().is_verbose() {
            for path in &written {
                ui.message(&format!("  {}", path.display()));
            }
        }
        ui.show_hint(&hints::after_init(&name));

        Ok(CommandResult::success())
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let template = EmbeddedTemplate::app()?;
        self.run(ui, &template)
    }
}

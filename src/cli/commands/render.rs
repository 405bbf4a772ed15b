//! Render command implementation.
//!
//! `tallyplate render FILE -s name=value ...` renders one template file and
//! prints the result.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context as _;

use crate::cli::args::RenderArgs;
use crate::error::{Result, TallyError};
use crate::template::{Context, TemplateEngine, Value};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The render command implementation.
pub struct RenderCommand {
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(args: RenderArgs) -> Self {
        Self { args }
    }

    /// Name the template is registered under.
    fn template_name(&self) -> String {
        self.args.name.clone().unwrap_or_else(|| {
            self.args
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "template".to_string())
        })
    }

    /// Build the render context from `--context` and `--set`.
    fn build_context(&self) -> Result<Context> {
        let mut ctx = match &self.args.context {
            Some(path) => load_context_file(path)?,
            None => Context::new(),
        };

        for assignment in &self.args.set {
            let (name, value) = Context::parse_assignment(assignment)?;
            ctx.insert(name, value);
        }

        Ok(ctx)
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.build_context()?;
        let name = self.template_name();

        let mut engine = TemplateEngine::new();
        engine.try_load_from_path(&name, &self.args.file)?;

        if let Some(template) = engine.template(&name) {
            for var in template.variables() {
                if ctx.get(&var).is_none() {
                    ui.warning(&format!(
                        "Variable '{}' is not set; its placeholder is left in the output",
                        var
                    ));
                }
            }
        }

        let rendered = engine.render(&name, &ctx);
        ui.output(&rendered);
        Ok(CommandResult::success())
    }
}

/// Read a JSON object of variables.
fn load_context_file(path: &Path) -> Result<Context> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file {}", path.display()))?;
    let values: HashMap<String, Value> =
        serde_json::from_str(&content).map_err(|e| TallyError::InvalidContext {
            message: format!("{}: {}", path.display(), e),
        })?;
    Ok(Context::from(values))
}

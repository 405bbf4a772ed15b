//! Counter command implementation.
//!
//! `tallyplate counter --clicks N` runs the counter widget headlessly: it
//! prints the button and the initial counter, then the counter after each
//! simulated click.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::CounterApp;
use crate::cli::args::CounterArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::template::TemplateEngine;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The counter command implementation.
pub struct CounterCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CounterArgs,
}

impl CounterCommand {
    /// Create a new counter command.
    pub fn new(project_root: &Path, args: CounterArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit config file.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }
}

impl Command for CounterCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        let mut options = config.engine_options();
        if self.args.no_cache {
            options.cache = false;
        }

        let templates_dir = match &self.args.templates {
            Some(dir) => dir.clone(),
            None => config.resolved_templates_dir(&self.project_root),
        };
        debug!("Loading counter templates from {}", templates_dir.display());

        let mut app = CounterApp::new(TemplateEngine::with_options(options))
            .with_button(config.button.clone());
        if !app.load_templates(&templates_dir) {
            ui.warning(&format!(
                "Could not load templates from {}; using built-in templates",
                templates_dir.display()
            ));
        }

        ui.output(&app.render_button());
        ui.output(&app.render_counter());
        for _ in 0..self.args.clicks {
            ui.output(&app.increment());
        }

        if ui.output_mode().shows_details() {
            let stats = app.engine().stats();
            ui.message(&format!(
                "Renders: {} computed, {} from cache ({} cached)",
                stats.computed,
                stats.hits,
                app.engine().cached_renders()
            ));
        }

        Ok(CommandResult::success())
    }
}

//! Check command implementation.
//!
//! `tallyplate check FILE...` reports template syntax that rendering would
//! silently pass through or resolve surprisingly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::template::{check_template, Diagnostic};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Diagnostics for one file.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    fn is_clean(&self) -> bool {
        self.error.is_none() && self.diagnostics.is_empty()
    }
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    fn check_file(path: &Path) -> FileReport {
        match fs::read_to_string(path) {
            Ok(source) => FileReport {
                path: path.to_path_buf(),
                error: None,
                diagnostics: check_template(&source),
            },
            Err(e) => FileReport {
                path: path.to_path_buf(),
                error: Some(e.to_string()),
                diagnostics: Vec::new(),
            },
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reports: Vec<FileReport> = self
            .args
            .files
            .iter()
            .map(|p| Self::check_file(p))
            .collect();
        let clean = reports.iter().all(FileReport::is_clean);

        if self.args.json {
            let json = serde_json::to_string_pretty(&reports).map_err(anyhow::Error::from)?;
            ui.output(&json);
        } else {
            for report in &reports {
                let path = report.path.display();
                if let Some(err) = &report.error {
                    ui.error(&format!("{}: {}", path, err));
                    continue;
                }
                if report.diagnostics.is_empty() {
                    ui.success(&format!("{}: no issues", path));
                    continue;
                }
                for diagnostic in &report.diagnostics {
                    ui.output(&format!("{}:{}", path, diagnostic));
                }
            }
        }

        Ok(if clean {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn clean_file_succeeds() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("ok.tpl");
        fs::write(&file, "{{ count }}").unwrap();

        let mut ui = MockUI::new();
        let result = CheckCommand::new(CheckArgs {
            files: vec![file],
            json: false,
        })
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        assert!(ui.has_success("no issues"));
    }

    #[test]
    fn nested_block_fails_with_position() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("nested.tpl");
        fs::write(&file, "{% if a %}\n{% if b %}x{% endif %}\n{% endif %}").unwrap();

        let mut ui = MockUI::new();
        let result = CheckCommand::new(CheckArgs {
            files: vec![file],
            json: false,
        })
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.outputs().len(), 1);
        assert!(ui.outputs()[0].contains("nested.tpl:2:1: [nested-block]"));
    }

    #[test]
    fn unreadable_file_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = CheckCommand::new(CheckArgs {
            files: vec![temp.path().join("missing.tpl")],
            json: false,
        })
        .execute(&mut ui)
        .unwrap();

        assert!(!result.success);
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn json_output_lists_diagnostics() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.tpl");
        fs::write(&file, "{% endif %}").unwrap();

        let mut ui = MockUI::new();
        CheckCommand::new(CheckArgs {
            files: vec![file],
            json: true,
        })
        .execute(&mut ui)
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(parsed[0]["diagnostics"][0]["kind"], "stray_endif");
        assert_eq!(parsed[0]["diagnostics"][0]["line"], 1);
    }
}

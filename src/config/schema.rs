//! Configuration schema definitions for tallyplate.
//!
//! This module contains the structs that map to the `.tallyplate.yml`
//! file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::ButtonConfig;
use crate::template::EngineOptions;

/// Root configuration structure for `.tallyplate.yml`.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Directory holding `counter.tpl` and `button.tpl`, relative to the
    /// project root unless absolute.
    pub templates_dir: PathBuf,

    /// Memoize rendered output.
    pub cache: bool,

    /// Increment button attributes.
    pub button: ButtonConfig,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            cache: true,
            button: ButtonConfig::default(),
        }
    }
}

impl TallyConfig {
    /// Engine options implied by this config.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions { cache: self.cache }
    }

    /// Templates directory resolved against `project_root`.
    pub fn resolved_templates_dir(&self, project_root: &Path) -> PathBuf {
        if self.templates_dir.is_absolute() {
            self.templates_dir.clone()
        } else {
            project_root.join(&self.templates_dir)
        }
    }
}

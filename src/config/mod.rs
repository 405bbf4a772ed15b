//! Project configuration.
//!
//! Configuration is optional. When present it lives in `.tallyplate.yml`
//! at the project root (or wherever `--config` points):
//!
//! ```yaml
//! templates_dir: templates
//! cache: true
//! button:
//!   id: increment-btn
//!   text: Increment
//! ```
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::TallyConfig;

//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::TallyConfig;
use crate::error::{Result, TallyError};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".tallyplate.yml";

/// Path of the project config, if one exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `.tallyplate.yml` in the
/// project root is used when present and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<TallyConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match find_project_config(project_root) {
            Some(p) => p,
            None => {
                debug!(
                    "No {} in {}, using defaults",
                    CONFIG_FILE_NAME,
                    project_root.display()
                );
                return Ok(TallyConfig::default());
            }
        },
    };

    load_config_file(&path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TallyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TallyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TallyError::Io(e)
        }
    })?;

    debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a [`TallyConfig`].
///
/// Empty content yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<TallyConfig> {
    if content.trim().is_empty() {
        return Ok(TallyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TallyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_config_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, TallyConfig::default());
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "cache: false\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert!(!config.cache);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(TallyError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_file_wins_over_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "cache: false\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "cache: true\ntemplates_dir: views\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert!(config.cache);
        assert_eq!(config.templates_dir, PathBuf::from("views"));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "cache: [not a bool").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, TallyError::ConfigParseError { .. }));
        assert!(err.to_string().contains(".tallyplate.yml"));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            load_config(temp.path(), None).unwrap(),
            TallyConfig::default()
        );
    }
}

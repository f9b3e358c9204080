use crate::errors::PlugstatsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file, relative to the process
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Run configuration.
///
/// Loaded once at startup and passed by reference into the pipeline;
/// nothing mutates it afterwards. CLI flags may override individual
/// fields for a single run without touching the file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Occurrence count above which a plugin counts as "often used"
    /// (strictly greater than).
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Root directory searched recursively for project files when no
    /// explicit paths are supplied. The scratch area lives underneath it.
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Whether the report lists the processed project paths.
    #[serde(default = "default_show_processed_projects")]
    pub show_processed_projects: bool,

    /// Whether the scratch directory is cleared after the report is written.
    #[serde(default = "default_cleanup_temp")]
    pub cleanup_temp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            project_dir: default_project_dir(),
            show_processed_projects: default_show_processed_projects(),
            cleanup_temp: default_cleanup_temp(),
        }
    }
}

fn default_threshold() -> u32 {
    5
}

fn default_project_dir() -> PathBuf {
    PathBuf::from("./projects")
}

fn default_show_processed_projects() -> bool {
    true
}

fn default_cleanup_temp() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing file is not an error: the defaults apply. A file that
    /// exists but cannot be read or parsed is fatal, since silently
    /// substituting defaults would mask a broken configuration.
    pub fn load(path: &Path) -> Result<Self, PlugstatsError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| PlugstatsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        parse_config(&contents).map_err(|message| PlugstatsError::Config {
            path: path.to_path_buf(),
            message,
        })
    }
}

fn parse_config(contents: &str) -> Result<Config, String> {
    serde_yaml::from_str::<Config>(contents).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.threshold, 5);
        assert_eq!(config.project_dir, PathBuf::from("./projects"));
        assert!(config.show_processed_projects);
        assert!(config.cleanup_temp);
    }

    #[test]
    fn parses_full_config() {
        let yaml = "threshold: 10\nproject_dir: /music/sets\nshow_processed_projects: false\ncleanup_temp: false\n";
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.threshold, 10);
        assert_eq!(config.project_dir, PathBuf::from("/music/sets"));
        assert!(!config.show_processed_projects);
        assert!(!config.cleanup_temp);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse_config("threshold: 2\n").unwrap();
        assert_eq!(config.threshold, 2);
        assert_eq!(config.project_dir, PathBuf::from("./projects"));
        assert!(config.show_processed_projects);
        assert!(config.cleanup_temp);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(parse_config("threshold: [not a number\n").is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = Config::load(Path::new("definitely/not/here.yaml")).unwrap();
        assert_eq!(config.threshold, 5);
    }

    #[test]
    fn unreadable_existing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "threshold: [broken\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.is_fatal());
    }
}

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::Case;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Convention applied when --to is not given: kebab, camel or dot.
    #[serde(default = "default_case")]
    pub default_case: String,

    /// Colored output; --no-color still wins over a true here.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_case() -> String {
    "kebab".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_case: default_case(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_case: Option<Case>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".recase.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(case) = cli_case {
            config.default_case = case.to_string();
        }

        Ok(config)
    }

    /// The convention used when no target is given on the command line.
    pub fn target_case(&self) -> Result<Case> {
        self.default_case
            .parse()
            .map_err(anyhow::Error::msg)
            .context("Invalid default_case in configuration")
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.default_case != default_case() {
            self.default_case = other.default_case;
        }
        self.color = other.color;
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_case, "kebab");
        assert!(config.color);
        assert_eq!(config.target_case().unwrap(), Case::Kebab);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            default_case: "camel".to_string(),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.default_case, "camel");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_case = \"dot\"\ncolor = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.target_case().unwrap(), Case::Dot);
        assert!(!config.color);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_case, "kebab");
        assert!(config.color);
    }

    #[test]
    fn test_invalid_case_is_rejected() {
        let config = Config {
            default_case: "pascal".to_string(),
            ..Default::default()
        };
        assert!(config.target_case().is_err());
    }
}

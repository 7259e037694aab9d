// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, PrlError, Result};
use std::path::{Path, PathBuf};

use super::schema::PrlConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &["prl.toml", ".prl.toml", ".config/prl.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let prl_config = config_dir.join("prl").join("config.toml");
        if prl_config.exists() {
            return Some(prl_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<PrlConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(PrlConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<PrlConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(PrlError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PrlError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<PrlConfig> {
    let config: PrlConfig = toml::from_str(content).map_err(|e| {
        PrlError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    validate(&config)?;
    Ok(config)
}

/// Reject values the analyzers cannot work with.
fn validate(config: &PrlConfig) -> Result<()> {
    let size = &config.size;
    if size.small_max_lines > size.medium_max_lines || size.small_max_files > size.medium_max_files
    {
        return Err(PrlError::Config(ConfigError::InvalidValue {
            key: "size".to_string(),
            message: "small thresholds must not exceed medium thresholds".to_string(),
        }));
    }

    if config.git.remote.trim().is_empty() {
        return Err(PrlError::Config(ConfigError::InvalidValue {
            key: "git.remote".to_string(),
            message: "remote name must not be empty".to_string(),
        }));
    }

    for pattern in &config.labels.hotfix_branches {
        if let Err(e) = glob::Pattern::new(pattern) {
            return Err(PrlError::Config(ConfigError::InvalidValue {
                key: "labels.hotfix_branches".to_string(),
                message: format!("'{}': {}", pattern, e),
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.size.small_max_lines, 50);
        assert_eq!(config.git.retries, 1);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[git]
remote = "upstream"
default_targets = ["trunk"]

[size]
small_max_lines = 20

[labels]
scope = false
hotfix_branches = ["hotfix/*", "hf-*"]

[output]
format = "csv"
colors = true
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.git.remote, "upstream");
        assert_eq!(config.git.default_targets, vec!["trunk"]);
        assert_eq!(config.size.small_max_lines, 20);
        assert_eq!(config.size.medium_max_lines, 200);
        assert!(!config.labels.scope);
        assert_eq!(config.labels.hotfix_branches.len(), 2);
        assert_eq!(config.output.format, "csv");
        assert!(config.output.colors);
    }

    #[test]
    fn test_reject_inverted_thresholds() {
        let toml = r#"
[size]
small_max_lines = 500
"#;
        assert!(matches!(
            parse_config(toml),
            Err(PrlError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_reject_bad_glob() {
        let toml = r#"
[labels]
hotfix_branches = ["hotfix/[*"]
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(matches!(
            parse_config("[size\nsmall_max_lines = 1"),
            Err(PrlError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prl.toml"), "[output]\nformat = \"txt\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("prl.toml"));

        let config = load_config_from(&found).unwrap();
        assert_eq!(config.output.format, "txt");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("missing.toml"));
        assert!(matches!(
            result,
            Err(PrlError::Config(ConfigError::NotFound { .. }))
        ));
    }
}

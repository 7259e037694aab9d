// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::PrlConfig;

/// Get the default configuration.
pub fn default_config() -> PrlConfig {
    PrlConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# prl Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Git settings
[git]
remote = "origin"
retries = 1
default_targets = ["main", "master", "develop"]

# Size label thresholds
[size]
small_max_lines = 50
small_max_files = 3
medium_max_lines = 200
medium_max_files = 10

# Label heuristics
[labels]
scope = true
hotfix_branches = ["hotfix/*"]
dependency_files = [
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "requirements.txt",
    "Pipfile",
    "Pipfile.lock",
    "composer.json",
    "composer.lock",
    "Gemfile",
    "Gemfile.lock",
    "go.mod",
    "go.sum",
]

# Output defaults
[output]
format = "json"
colors = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.size.small_max_files, 3);
        assert_eq!(config.labels.hotfix_branches, vec!["hotfix/*"]);
    }

    #[test]
    fn test_example_config_parseable() {
        let config = crate::config::parse_config(example_config())
            .expect("Example config should parse");
        assert_eq!(config.labels.dependency_files.len(), 13);
        assert_eq!(config.size, default_config().size);
    }
}

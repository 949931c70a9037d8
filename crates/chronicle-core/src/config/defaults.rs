//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "chronicle.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "chronicle.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".chronicle.toml",
        ".chronicle.yaml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Chronicle configuration
# See https://github.com/example/chronicle for documentation

[project]
title = "Changelog"
# description = "What this project is about"

[traversal]
rev = "HEAD"
tag_pattern = "*"
include_branches = ["*"]
exclude_branches = []
keep_unreleased = true

[changelog]
file = "CHANGELOG.md"
include_hashes = true
include_authors = false

[changelog.types.feat]
section = "Features"
hidden = false

[changelog.types.fix]
section = "Bug Fixes"
hidden = false

[changelog.types.docs]
section = "Documentation"
hidden = false

[changelog.types.perf]
section = "Performance"
hidden = false

[changelog.types.refactor]
section = "Refactoring"
hidden = true

[changelog.types.test]
section = "Tests"
hidden = true

[changelog.types.chore]
section = "Chores"
hidden = true
"#;

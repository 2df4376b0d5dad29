use super::Configuration;
use crate::issue::{Issue, Severity};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File-backed lint configuration
///
/// Entries in `check`, `enable` and `disable` may be issue ids, simple glob
/// patterns over ids (`Unused*`), or category names. A category name also
/// selects the issues of its child categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Only check matching issues (all issues when empty)
    pub check: Vec<String>,

    /// Issues to turn on, including ones disabled by default
    pub enable: Vec<String>,

    /// Issues to turn off
    pub disable: Vec<String>,

    /// Per-issue severity overrides, keyed by issue id
    pub severity: BTreeMap<String, Severity>,

    /// Turn on every issue that is disabled by default
    pub check_all: bool,

    /// Report warnings as errors
    pub warnings_as_errors: bool,

    /// Drop all warnings
    pub ignore_warnings: bool,
}

impl LintConfig {
    /// Load configuration from a file (YAML, TOML or JSON)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            "json" => serde_json::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse JSON config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            "lint.yml",
            "lint.yaml",
            "lint.toml",
            "lint.json",
            ".lint.yml",
            ".lint.yaml",
            ".lint.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    fn matches_any(entries: &[String], issue: &Issue) -> bool {
        entries.iter().any(|entry| {
            glob_match(entry, issue.id()) || issue.category().matches(entry)
        })
    }
}

impl Configuration for LintConfig {
    fn severity(&self, issue: &Issue) -> Severity {
        if !self.check.is_empty() && !Self::matches_any(&self.check, issue) {
            return Severity::Ignore;
        }

        let severity = if let Some(severity) = self.severity.get(issue.id()) {
            *severity
        } else if Self::matches_any(&self.disable, issue) {
            Severity::Ignore
        } else if Self::matches_any(&self.enable, issue)
            || Self::matches_any(&self.check, issue)
            || self.check_all
            || issue.is_enabled_by_default()
        {
            issue.default_severity()
        } else {
            Severity::Ignore
        };

        match severity {
            Severity::Warning if self.ignore_warnings => Severity::Ignore,
            Severity::Warning if self.warnings_as_errors => Severity::Error,
            other => other,
        }
    }
}

/// Simple glob matching for patterns like "Unused*" or "*Api"
fn glob_match(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if let Some(middle) = suffix.strip_suffix('*') {
            // Pattern like "*Translation*"
            return text.contains(middle);
        }
        // Pattern like "*Api" matches "NewApi"
        return text.ends_with(suffix);
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        // Pattern like "Unused*" matches "UnusedIds"
        return text.starts_with(prefix);
    }

    // Exact match
    text == pattern
}

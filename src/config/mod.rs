mod loader;

pub use loader::LintConfig;

use crate::issue::{Issue, Severity};

/// Decides which issues are checked in a run, and how severe they are
pub trait Configuration {
    /// Effective severity of `issue` for this run
    fn severity(&self, issue: &Issue) -> Severity {
        if issue.is_enabled_by_default() {
            issue.default_severity()
        } else {
            Severity::Ignore
        }
    }

    fn is_enabled(&self, issue: &Issue) -> bool {
        self.severity(issue) != Severity::Ignore
    }
}

/// Configuration using each issue's built-in defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfiguration;

impl Configuration for DefaultConfiguration {}

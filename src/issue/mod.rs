// Issue catalog entries and the value types they carry

mod category;
mod scope;
mod severity;

pub use category::Category;
pub use scope::{Scope, ScopeSet};
pub use severity::Severity;

use crate::detector::DetectorId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Priority given to issues that do not set one
pub const DEFAULT_PRIORITY: u8 = 5;

/// A catalogued check: what it finds, how bad it is, and which detector finds it
///
/// Issues are immutable once built and are identified by their id alone.
#[derive(Clone)]
pub struct Issue {
    id: String,
    brief_description: String,
    explanation: String,
    category: Category,
    priority: u8,
    severity: Severity,
    detector: Option<DetectorId>,
    scope: ScopeSet,
    enabled_by_default: bool,
    more_info: Vec<String>,
}

impl Issue {
    pub fn new(id: impl Into<String>, category: Category, severity: Severity, scope: ScopeSet) -> Self {
        Self {
            id: id.into(),
            brief_description: String::new(),
            explanation: String::new(),
            category,
            priority: DEFAULT_PRIORITY,
            severity,
            detector: None,
            scope,
            enabled_by_default: true,
            more_info: Vec::new(),
        }
    }

    pub fn with_detector(mut self, detector: DetectorId) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief_description = brief.into();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Priority from 1 (lowest) to 10 (highest)
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_more_info(mut self, url: impl Into<String>) -> Self {
        self.more_info.push(url.into());
        self
    }

    /// Mark the issue as off unless a configuration turns it on
    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn brief_description(&self) -> &str {
        &self.brief_description
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn default_severity(&self) -> Severity {
        self.severity
    }

    /// Detector implementation that reports this issue
    ///
    /// `None` for issues reported directly by the scanning frontend, such as
    /// [`crate::registry::PARSER_ERROR`].
    pub fn detector(&self) -> Option<&DetectorId> {
        self.detector.as_ref()
    }

    /// Scopes that must all be part of a run for this issue to be checked
    pub fn scope(&self) -> ScopeSet {
        self.scope
    }

    pub fn is_enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    pub fn more_info(&self) -> &[String] {
        &self.more_info
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Issue {}

impl Hash for Issue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Issue")
            .field("id", &self.id)
            .field("category", &self.category.full_name())
            .field("severity", &self.severity)
            .field("detector", &self.detector)
            .field("scope", &self.scope)
            .finish()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

#[derive(Debug, Default)]
pub struct AccessibilityDetector;

impl AccessibilityDetector {
    pub const ID: DetectorId = DetectorId::from_static("AccessibilityDetector");
}

impl Detector for AccessibilityDetector {
    fn name(&self) -> &'static str {
        "AccessibilityDetector"
    }
}

pub static CONTENT_DESCRIPTION: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("ContentDescription", Category::ACCESSIBILITY, Severity::Warning, ScopeSet::RESOURCE_FILE)
        .with_detector(AccessibilityDetector::ID)
        .with_priority(3)
        .with_brief("Ensures that image widgets provide a contentDescription")
        .with_explanation(
            "Non-textual widgets like ImageViews and ImageButtons should use the \
             contentDescription attribute to specify a textual description of the \
             widget such that screen readers can describe it.",
        )
});

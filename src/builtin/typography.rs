use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

/// Detector for plain-ASCII punctuation that has a typographic replacement
#[derive(Debug, Default)]
pub struct TypographyDetector;

impl TypographyDetector {
    pub const ID: DetectorId = DetectorId::from_static("TypographyDetector");
}

impl Detector for TypographyDetector {
    fn name(&self) -> &'static str {
        "TypographyDetector"
    }
}

pub static DASHES: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("TypographyDashes", Category::TYPOGRAPHY, Severity::Warning, ScopeSet::RESOURCE_FILE)
        .with_detector(TypographyDetector::ID)
        .with_priority(5)
        .with_brief("Looks for usages of hyphens which can be replaced by n dash and m dash characters")
        .with_explanation("The \"n dash\" is used for ranges; the \"m dash\" for breaks in a sentence.")
});

pub static ELLIPSIS: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("TypographyEllipsis", Category::TYPOGRAPHY, Severity::Warning, ScopeSet::RESOURCE_FILE)
        .with_detector(TypographyDetector::ID)
        .with_priority(5)
        .with_brief("Looks for ellipsis strings (...) which can be replaced with an ellipsis character")
        .with_explanation("You can replace the string \"...\" with a dedicated ellipsis character.")
});

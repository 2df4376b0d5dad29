use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

/// Detector for text attributes set to literal strings in layouts
#[derive(Debug, Default)]
pub struct HardcodedValuesDetector;

impl HardcodedValuesDetector {
    pub const ID: DetectorId = DetectorId::from_static("HardcodedValuesDetector");
}

impl Detector for HardcodedValuesDetector {
    fn name(&self) -> &'static str {
        "HardcodedValuesDetector"
    }
}

pub static HARDCODED_TEXT: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("HardcodedText", Category::I18N, Severity::Warning, ScopeSet::RESOURCE_FILE)
        .with_detector(HardcodedValuesDetector::ID)
        .with_priority(5)
        .with_brief("Looks for hardcoded text attributes which should be converted to resource lookup")
        .with_explanation(
            "Hardcoding text attributes directly in layout files is bad because \
             the application cannot be translated, and the same text cannot be \
             shared between layouts.",
        )
});

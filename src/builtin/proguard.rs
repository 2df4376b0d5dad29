use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

#[derive(Debug, Default)]
pub struct ProguardDetector;

impl ProguardDetector {
    pub const ID: DetectorId = DetectorId::from_static("ProguardDetector");
}

impl Detector for ProguardDetector {
    fn name(&self) -> &'static str {
        "ProguardDetector"
    }
}

pub static WRONG_KEEP: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("Proguard", Category::CORRECTNESS, Severity::Fatal, ScopeSet::PROGUARD_FILE)
        .with_detector(ProguardDetector::ID)
        .with_priority(8)
        .with_brief("Looks for problems in proguard config files")
        .with_explanation(
            "Using -keepclasseswithmembernames in a proguard config file is not \
             correct; it can cause some symbols to be renamed which should not be.",
        )
});

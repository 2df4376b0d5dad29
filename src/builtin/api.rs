use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

/// Detector for calls to APIs newer than the minimum SDK
///
/// Works on compiled class files, where resolved method references are known.
#[derive(Debug, Default)]
pub struct ApiDetector;

impl ApiDetector {
    pub const ID: DetectorId = DetectorId::from_static("ApiDetector");
}

impl Detector for ApiDetector {
    fn name(&self) -> &'static str {
        "ApiDetector"
    }
}

pub static UNSUPPORTED: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("NewApi", Category::CORRECTNESS, Severity::Error, ScopeSet::CLASS_FILE)
        .with_detector(ApiDetector::ID)
        .with_priority(6)
        .with_brief("Finds API accesses to APIs that are not supported in all targeted API versions")
        .with_explanation(
            "This check scans through all the Android API calls in the application \
             and warns about any calls that are not available on all versions \
             targeted by this application.",
        )
});

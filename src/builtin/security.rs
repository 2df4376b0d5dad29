//! Security checks
//!
//! One detector covers both the manifest (exported components) and Java code
//! (world-writeable file modes), so its scope union spans both.

use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

#[derive(Debug, Default)]
pub struct SecurityDetector;

impl SecurityDetector {
    pub const ID: DetectorId = DetectorId::from_static("SecurityDetector");
}

impl Detector for SecurityDetector {
    fn name(&self) -> &'static str {
        "SecurityDetector"
    }
}

pub static EXPORTED_SERVICE: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("ExportedService", Category::SECURITY, Severity::Warning, ScopeSet::MANIFEST)
        .with_detector(SecurityDetector::ID)
        .with_priority(5)
        .with_brief("Checks for exported services that do not require permissions")
        .with_explanation(
            "Exported services (services which either set exported=true or contain \
             an intent-filter and do not specify exported=false) should define a \
             permission that an entity must have in order to launch the service.",
        )
});

pub static WORLD_WRITEABLE: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("WorldWriteableFiles", Category::SECURITY, Severity::Warning, ScopeSet::JAVA_FILE)
        .with_detector(SecurityDetector::ID)
        .with_priority(4)
        .with_brief("Checks for openFileOutput() and getSharedPreferences() calls passing MODE_WORLD_WRITEABLE")
        .with_explanation(
            "There are cases where it is appropriate for an application to write \
             world writeable files, but these should be reviewed carefully.",
        )
});

//! Unused resource checks
//!
//! Whether a resource is referenced can only be decided after every resource
//! file, every Java file and the manifest have been seen, so these issues need
//! project-wide scopes.

use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, Scope, ScopeSet, Severity};
use std::sync::LazyLock;

const SCOPE: ScopeSet = ScopeSet::of(Scope::AllResourceFiles)
    .with(Scope::AllJavaFiles)
    .with(Scope::Manifest);

/// Detector for resources and ids that are never referenced
#[derive(Debug, Default)]
pub struct UnusedResourceDetector;

impl UnusedResourceDetector {
    pub const ID: DetectorId = DetectorId::from_static("UnusedResourceDetector");
}

impl Detector for UnusedResourceDetector {
    fn name(&self) -> &'static str {
        "UnusedResourceDetector"
    }
}

pub static UNUSED_RESOURCES: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("UnusedResources", Category::PERFORMANCE, Severity::Warning, SCOPE)
        .with_detector(UnusedResourceDetector::ID)
        .with_priority(3)
        .with_brief("Looks for unused resources")
        .with_explanation(
            "Unused resources make applications larger and slow down builds.",
        )
});

/// Unused `@+id` declarations; noisy, so off unless requested
pub static UNUSED_IDS: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("UnusedIds", Category::PERFORMANCE, Severity::Warning, SCOPE)
        .with_detector(UnusedResourceDetector::ID)
        .with_priority(1)
        .with_brief("Looks for unused id's")
        .with_explanation(
            "This resource id definition appears not to be needed since it is not \
             referenced from anywhere.",
        )
        .disabled_by_default()
});

//! AndroidManifest.xml structure checks
//!
//! Element order matters to the platform: a `<uses-sdk>` placed after the
//! `<application>` element is silently ignored by some tools.

use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

/// Detector for manifest element order and `<uses-sdk>` declarations
#[derive(Debug, Default)]
pub struct ManifestOrderDetector;

impl ManifestOrderDetector {
    pub const ID: DetectorId = DetectorId::from_static("ManifestOrderDetector");
}

impl Detector for ManifestOrderDetector {
    fn name(&self) -> &'static str {
        "ManifestOrderDetector"
    }
}

/// `<application>` declared before other top-level elements
pub static ORDER: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("ManifestOrder", Category::CORRECTNESS, Severity::Warning, ScopeSet::MANIFEST)
        .with_detector(ManifestOrderDetector::ID)
        .with_priority(5)
        .with_brief("Checks for manifest problems like <uses-sdk> after the <application> tag")
        .with_explanation(
            "The <application> tag should appear after the elements which declare \
             which version you need, which features you need, which libraries you \
             need, and so on.",
        )
});

/// `<uses-sdk>` missing `minSdkVersion` or `targetSdkVersion`
pub static USES_SDK: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("UsesMinSdkAttributes", Category::CORRECTNESS, Severity::Warning, ScopeSet::MANIFEST)
        .with_detector(ManifestOrderDetector::ID)
        .with_priority(9)
        .with_brief("Checks that the minimum SDK and target SDK attributes are defined")
        .with_explanation(
            "The manifest should contain a <uses-sdk> element which defines the \
             minimum API level required for the application to run, as well as \
             the target version.",
        )
        .with_more_info("https://developer.android.com/guide/topics/manifest/uses-sdk-element.html")
});

pub static MULTIPLE_USES_SDK: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("MultipleUsesSdk", Category::CORRECTNESS, Severity::Error, ScopeSet::MANIFEST)
        .with_detector(ManifestOrderDetector::ID)
        .with_priority(6)
        .with_brief("Checks that the <uses-sdk> element appears at most once")
        .with_explanation("The <uses-sdk> element should appear just once.")
});

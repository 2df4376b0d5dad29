use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

/// Detector for launcher and drawable icon problems across density folders
#[derive(Debug, Default)]
pub struct IconDetector;

impl IconDetector {
    pub const ID: DetectorId = DetectorId::from_static("IconDetector");
}

impl Detector for IconDetector {
    fn name(&self) -> &'static str {
        "IconDetector"
    }
}

pub static ICON_DENSITIES: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("IconDensities", Category::ICONS, Severity::Warning, ScopeSet::ALL_RESOURCES)
        .with_detector(IconDetector::ID)
        .with_priority(4)
        .with_brief("Ensures that icons provide custom versions for all supported densities")
        .with_explanation(
            "Icons will look best if a custom version is provided for each of the \
             major screen density classes.",
        )
});

pub static ICON_MISSING_FOLDER: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("IconMissingDensityFolder", Category::ICONS, Severity::Warning, ScopeSet::ALL_RESOURCES)
        .with_detector(IconDetector::ID)
        .with_priority(3)
        .with_brief("Ensures that all the density folders are present")
        .with_explanation(
            "Icons will look best if a custom version is provided for each of the \
             major screen density classes.",
        )
});

// Built-in Android issue catalog
//
// The detectors here register the catalog entries; their analysis runs in the
// scanning frontend.

pub mod accessibility;
pub mod api;
pub mod hardcoded_values;
pub mod icons;
pub mod manifest;
pub mod proguard;
pub mod security;
pub mod translation;
pub mod typography;
pub mod unused_resources;

pub use accessibility::AccessibilityDetector;
pub use api::ApiDetector;
pub use hardcoded_values::HardcodedValuesDetector;
pub use icons::IconDetector;
pub use manifest::ManifestOrderDetector;
pub use proguard::ProguardDetector;
pub use security::SecurityDetector;
pub use translation::TranslationDetector;
pub use typography::TypographyDetector;
pub use unused_resources::UnusedResourceDetector;

use crate::detector::{default_factory, DetectorTable};
use crate::issue::Issue;
use crate::registry::IssueProvider;

/// Provider for the built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIssueProvider;

impl IssueProvider for BuiltinIssueProvider {
    fn issues(&self) -> Vec<Issue> {
        [
            &*manifest::ORDER,
            &*manifest::USES_SDK,
            &*manifest::MULTIPLE_USES_SDK,
            &*hardcoded_values::HARDCODED_TEXT,
            &*unused_resources::UNUSED_RESOURCES,
            &*unused_resources::UNUSED_IDS,
            &*translation::MISSING,
            &*translation::EXTRA,
            &*api::UNSUPPORTED,
            &*proguard::WRONG_KEEP,
            &*security::EXPORTED_SERVICE,
            &*security::WORLD_WRITEABLE,
            &*icons::ICON_DENSITIES,
            &*icons::ICON_MISSING_FOLDER,
            &*typography::DASHES,
            &*typography::ELLIPSIS,
            &*accessibility::CONTENT_DESCRIPTION,
        ]
        .into_iter()
        .cloned()
        .collect()
    }

    fn detectors(&self) -> DetectorTable {
        DetectorTable::new()
            .with(ManifestOrderDetector::ID, default_factory::<ManifestOrderDetector>)
            .with(HardcodedValuesDetector::ID, default_factory::<HardcodedValuesDetector>)
            .with(UnusedResourceDetector::ID, default_factory::<UnusedResourceDetector>)
            .with(TranslationDetector::ID, default_factory::<TranslationDetector>)
            .with(ApiDetector::ID, default_factory::<ApiDetector>)
            .with(ProguardDetector::ID, default_factory::<ProguardDetector>)
            .with(SecurityDetector::ID, default_factory::<SecurityDetector>)
            .with(IconDetector::ID, default_factory::<IconDetector>)
            .with(TypographyDetector::ID, default_factory::<TypographyDetector>)
            .with(AccessibilityDetector::ID, default_factory::<AccessibilityDetector>)
    }
}

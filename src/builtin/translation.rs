use crate::detector::{Detector, DetectorId};
use crate::issue::{Category, Issue, ScopeSet, Severity};
use std::sync::LazyLock;

/// Detector comparing string resources across locales
#[derive(Debug, Default)]
pub struct TranslationDetector;

impl TranslationDetector {
    pub const ID: DetectorId = DetectorId::from_static("TranslationDetector");
}

impl Detector for TranslationDetector {
    fn name(&self) -> &'static str {
        "TranslationDetector"
    }
}

pub static MISSING: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("MissingTranslation", Category::MESSAGES, Severity::Error, ScopeSet::ALL_RESOURCES)
        .with_detector(TranslationDetector::ID)
        .with_priority(8)
        .with_brief("Checks for incomplete translations where not all strings are translated")
        .with_explanation(
            "If an application has more than one locale, then all the strings \
             declared in one language should also be translated in all other languages.",
        )
});

pub static EXTRA: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new("ExtraTranslation", Category::MESSAGES, Severity::Fatal, ScopeSet::ALL_RESOURCES)
        .with_detector(TranslationDetector::ID)
        .with_priority(6)
        .with_brief("Checks for translations that appear to be unused (no default language string)")
        .with_explanation(
            "If a string appears in a specific language translation file, it must \
             also appear in the base language file.",
        )
});

//! Integration tests for detector selection
//!
//! These tests verify that the selector instantiates each detector once, keeps
//! the scope union of the issues that selected it, honors client overrides and
//! survives detectors that fail to construct.

use lintregistry::{
    default_factory, Category, Detector, DetectorId, Issue, IssueCatalog, LintClient, LintConfig,
    Registry, RegistryError, Scope, ScopeSet, Severity,
};
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

const X: DetectorId = DetectorId::from_static("DetectorX");
const Y: DetectorId = DetectorId::from_static("DetectorY");
const FAILING: DetectorId = DetectorId::from_static("FailingDetector");
const X2: DetectorId = DetectorId::from_static("DetectorX2");

const FILE: ScopeSet = ScopeSet::RESOURCE_FILE;
const PROJECT: ScopeSet = ScopeSet::ALL_RESOURCES;

#[derive(Default)]
struct DetectorX;
impl Detector for DetectorX {
    fn name(&self) -> &'static str {
        "DetectorX"
    }
}

#[derive(Default)]
struct DetectorY;
impl Detector for DetectorY {}

#[derive(Default)]
struct DetectorX2;
impl Detector for DetectorX2 {
    fn name(&self) -> &'static str {
        "DetectorX2"
    }
}

fn failing_factory() -> anyhow::Result<Box<dyn Detector>> {
    anyhow::bail!("could not load API database")
}

fn issue(id: &str, detector: DetectorId, scope: ScopeSet) -> Issue {
    Issue::new(id, Category::CORRECTNESS, Severity::Warning, scope).with_detector(detector)
}

/// Catalog {A -> X {FILE}, B -> X {PROJECT}, C -> Y {FILE}}
fn example_catalog() -> IssueCatalog {
    IssueCatalog::new()
        .with_issue(issue("A", X, FILE))
        .with_issue(issue("B", X, PROJECT))
        .with_issue(issue("C", Y, FILE))
        .with_detector(X, default_factory::<DetectorX>)
        .with_detector(Y, default_factory::<DetectorY>)
        .with_detector(X2, default_factory::<DetectorX2>)
}

fn disabled(ids: &[&str]) -> LintConfig {
    LintConfig {
        disable: ids.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Client that records log calls and optionally substitutes detectors
#[derive(Default)]
struct RecordingClient {
    replacements: Vec<(DetectorId, DetectorId)>,
    logged: RefCell<Vec<(Severity, String, Option<String>)>>,
}

impl RecordingClient {
    fn replacing(from: DetectorId, to: DetectorId) -> Self {
        Self {
            replacements: vec![(from, to)],
            ..Default::default()
        }
    }
}

impl LintClient for RecordingClient {
    fn replace_detector(&self, detector: &DetectorId) -> DetectorId {
        self.replacements
            .iter()
            .find(|(from, _)| from == detector)
            .map(|(_, to)| to.clone())
            .unwrap_or_else(|| detector.clone())
    }

    fn log(&self, severity: Severity, error: Option<&anyhow::Error>, message: &str) {
        self.logged.borrow_mut().push((
            severity,
            message.to_string(),
            error.map(|e| e.to_string()),
        ));
    }
}

fn ids_for(selection: &lintregistry::Selection, scope: Scope) -> Vec<DetectorId> {
    selection.detectors_for(scope).map(|d| d.id().clone()).collect()
}

// ============================================================================
// Worked examples
// ============================================================================

mod example_tests {
    use super::*;

    #[test]
    fn test_union_of_all_enabled_issues() {
        let registry = Registry::new(example_catalog()).unwrap();
        let client = RecordingClient::default();
        let selection = registry
            .create_detectors_by_scope(&LintConfig::default(), FILE.union(PROJECT), &client)
            .unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.get(&X).unwrap().scope(), FILE.union(PROJECT));
        assert_eq!(selection.get(&Y).unwrap().scope(), FILE);

        assert_eq!(ids_for(&selection, Scope::ResourceFile), vec![X, Y]);
        assert_eq!(ids_for(&selection, Scope::AllResourceFiles), vec![X]);
        assert_eq!(
            selection.scopes().collect::<Vec<_>>(),
            vec![Scope::ResourceFile, Scope::AllResourceFiles]
        );
        assert!(client.logged.borrow().is_empty());
    }

    #[test]
    fn test_out_of_scope_issue_does_not_widen_union() {
        let registry = Registry::new(example_catalog()).unwrap();
        let client = RecordingClient::default();
        let selection = registry
            .create_detectors_by_scope(&LintConfig::default(), FILE, &client)
            .unwrap();

        // X still runs because A is enabled and in scope
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.get(&X).unwrap().scope(), FILE);
        assert_eq!(ids_for(&selection, Scope::AllResourceFiles), Vec::<DetectorId>::new());
        assert_eq!(ids_for(&selection, Scope::ResourceFile), vec![X, Y]);
    }
}

// ============================================================================
// Enable and scope gate
// ============================================================================

mod gate_tests {
    use super::*;

    #[test]
    fn test_disabled_issue_does_not_widen_union() {
        let registry = Registry::new(example_catalog()).unwrap();
        let selection = registry
            .create_detectors_by_scope(&disabled(&["B"]), FILE.union(PROJECT), &RecordingClient::default())
            .unwrap();

        assert_eq!(selection.get(&X).unwrap().scope(), FILE);
    }

    #[test]
    fn test_disabled_issue_selects_via_sibling() {
        let registry = Registry::new(example_catalog()).unwrap();
        let selection = registry
            .create_detectors(&disabled(&["A"]), FILE.union(PROJECT), &RecordingClient::default())
            .unwrap();

        // A is off, but B still needs X
        assert!(selection.contains(&X));
        assert_eq!(selection.get(&X).unwrap().scope(), PROJECT);
    }

    #[test]
    fn test_detector_without_enabled_issue_is_not_selected() {
        let registry = Registry::new(example_catalog()).unwrap();
        let selection = registry
            .create_detectors(&disabled(&["A", "B"]), FILE.union(PROJECT), &RecordingClient::default())
            .unwrap();

        assert!(!selection.contains(&X));
        assert!(selection.contains(&Y));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_detector_without_in_scope_issue_is_not_selected() {
        let registry = Registry::new(example_catalog()).unwrap();
        let selection = registry
            .create_detectors(&LintConfig::default(), ScopeSet::MANIFEST, &RecordingClient::default())
            .unwrap();

        assert!(selection.is_empty());
    }

    #[test]
    fn test_partial_scope_overlap_is_not_enough() {
        let catalog = IssueCatalog::new()
            .with_issue(issue("Wide", X, FILE.union(ScopeSet::JAVA_FILE)))
            .with_detector(X, default_factory::<DetectorX>);
        let registry = Registry::new(catalog).unwrap();

        let selection = registry
            .create_detectors(&LintConfig::default(), FILE, &RecordingClient::default())
            .unwrap();
        assert!(selection.is_empty());

        let selection = registry
            .create_detectors(&LintConfig::default(), ScopeSet::ALL, &RecordingClient::default())
            .unwrap();
        assert_eq!(selection.len(), 1);
    }
}

// ============================================================================
// Instantiation
// ============================================================================

mod instantiation_tests {
    use super::*;

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    struct CountedDetector;
    impl Detector for CountedDetector {}

    fn counted_factory() -> anyhow::Result<Box<dyn Detector>> {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountedDetector))
    }

    #[test]
    fn test_shared_detector_constructed_once() {
        let counted = DetectorId::from_static("Counted");
        let catalog = IssueCatalog::new()
            .with_issues((0..5).map(|i| issue(&format!("Issue{}", i), counted.clone(), FILE)))
            .with_detector(counted.clone(), counted_factory);
        let registry = Registry::new(catalog).unwrap();

        let selection = registry
            .create_detectors_by_scope(&LintConfig::default(), FILE, &RecordingClient::default())
            .unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
        assert_eq!(selection.detectors_for(Scope::ResourceFile).count(), 1);
    }

    #[test]
    fn test_failure_is_logged_and_skipped() {
        let catalog = example_catalog()
            .with_issue(issue("D", FAILING, FILE))
            .with_detector(FAILING, failing_factory);
        let registry = Registry::new(catalog).unwrap();
        let client = RecordingClient::default();

        let selection = registry
            .create_detectors_by_scope(&LintConfig::default(), FILE, &client)
            .unwrap();

        assert_eq!(selection.len(), 2);
        assert!(!selection.contains(&FAILING));
        assert_eq!(ids_for(&selection, Scope::ResourceFile), vec![X, Y]);

        assert_eq!(selection.failures().len(), 1);
        assert_eq!(selection.failures()[0].detector(), &FAILING);
        assert_eq!(
            selection.failures()[0].error().to_string(),
            "could not load API database"
        );

        let logged = client.logged.borrow();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].0, Severity::Error);
        assert_eq!(logged[0].1, "Can't initialize detector FailingDetector");
        assert_eq!(logged[0].2.as_deref(), Some("could not load API database"));
    }

    #[test]
    fn test_instances_are_usable() {
        let registry = Registry::new(example_catalog()).unwrap();
        let selection = registry
            .create_detectors(&LintConfig::default(), FILE, &RecordingClient::default())
            .unwrap();

        let names: Vec<_> = selection.iter().map(|d| d.detector().name()).collect();
        assert_eq!(names[0], "DetectorX");
        assert!(names[1].ends_with("DetectorY"));

        let detectors: Vec<Box<dyn Detector>> = selection
            .into_detectors()
            .into_iter()
            .map(|d| d.into_detector())
            .collect();
        assert_eq!(detectors.len(), 2);
    }

    #[test]
    fn test_repeated_selection_is_idempotent() {
        let registry = Registry::new(example_catalog()).unwrap();
        let run = |registry: &Registry| {
            let selection = registry
                .create_detectors_by_scope(&LintConfig::default(), FILE.union(PROJECT), &RecordingClient::default())
                .unwrap();
            selection
                .iter()
                .map(|d| (d.id().clone(), d.scope()))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(&registry), run(&registry));
    }
}

// ============================================================================
// Client overrides
// ============================================================================

mod replacement_tests {
    use super::*;

    #[test]
    fn test_replacement_is_instantiated() {
        let registry = Registry::new(example_catalog()).unwrap();
        let client = RecordingClient::replacing(X, X2);

        let selection = registry
            .create_detectors_by_scope(&LintConfig::default(), FILE.union(PROJECT), &client)
            .unwrap();

        assert!(!selection.contains(&X));
        let replaced = selection.get(&X2).unwrap();
        assert_eq!(replaced.detector().name(), "DetectorX2");
        // Both issues of X contribute to the replacement's scope
        assert_eq!(replaced.scope(), FILE.union(PROJECT));
        assert_eq!(ids_for(&selection, Scope::AllResourceFiles), vec![X2]);
    }

    #[test]
    fn test_two_detectors_replaced_by_one_share_instance() {
        let registry = Registry::new(example_catalog()).unwrap();
        let client = RecordingClient {
            replacements: vec![(X, X2), (Y, X2)],
            ..Default::default()
        };

        let selection = registry
            .create_detectors_by_scope(&LintConfig::default(), FILE.union(PROJECT), &client)
            .unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get(&X2).unwrap().scope(), FILE.union(PROJECT));
        assert_eq!(ids_for(&selection, Scope::ResourceFile), vec![X2]);
    }

    #[test]
    fn test_unregistered_replacement_is_fatal() {
        let registry = Registry::new(example_catalog()).unwrap();
        let client = RecordingClient::replacing(Y, DetectorId::new("Nowhere"));

        let err = registry
            .create_detectors(&LintConfig::default(), FILE, &client)
            .unwrap_err();

        match err {
            RegistryError::UnresolvedDetector {
                issue,
                detector,
                replacement,
            } => {
                assert_eq!(issue, "C");
                assert_eq!(detector, "DetectorY");
                assert_eq!(replacement, "Nowhere");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_replacement_not_asked_for_gated_issues() {
        let registry = Registry::new(example_catalog()).unwrap();
        // Y only backs C, which is disabled, so the bad replacement never matters
        let client = RecordingClient::replacing(Y, DetectorId::new("Nowhere"));

        let selection = registry
            .create_detectors(&disabled(&["C"]), FILE, &client)
            .unwrap();
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&X));
    }
}

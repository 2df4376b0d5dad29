//! Detector selection
//!
//! Works out which detectors a run needs. Selection runs in two phases:
//!
//! 1. **Accept** - walk the catalog and collect the detector of every issue that
//!    is enabled and fits in the requested scope, after giving the client a
//!    chance to substitute another implementation. Each accepted detector keeps
//!    the union of the scopes of the issues that selected it.
//! 2. **Instantiate** - construct each accepted detector exactly once. A
//!    constructor that fails is reported to the client and skipped; the rest of
//!    the run goes ahead without it.
//!
//! When grouping is requested, each instance is also filed under every scope in
//! its union so a scheduler can invoke it only in the matching phases.

use crate::client::LintClient;
use crate::config::Configuration;
use crate::detector::{Detector, DetectorId, DetectorTable};
use crate::issue::{Issue, Scope, ScopeSet, Severity};
use crate::registry::RegistryError;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Computes the detectors to run for a catalog snapshot
pub struct DetectorSelector<'a> {
    issues: &'a [Issue],
    detectors: &'a DetectorTable,
    group_by_scope: bool,
}

/// A detector accepted during the first phase, not yet constructed
struct Accepted {
    id: DetectorId,
    scope: ScopeSet,
}

impl<'a> DetectorSelector<'a> {
    pub fn new(issues: &'a [Issue], detectors: &'a DetectorTable) -> Self {
        Self {
            issues,
            detectors,
            group_by_scope: false,
        }
    }

    /// Also build the scope -> detectors grouping
    pub fn group_by_scope(mut self, enabled: bool) -> Self {
        self.group_by_scope = enabled;
        self
    }

    /// Select and instantiate the detectors for one run
    ///
    /// Only issues that pass both `configuration` and the `scope` test take
    /// part: they select their detector and widen its scope union. An issue
    /// that fails either test contributes nothing, even when another issue
    /// already selected the same detector.
    ///
    /// Fails only when the client substitutes a detector that has no
    /// registered constructor.
    pub fn select(
        &self,
        configuration: &dyn Configuration,
        scope: ScopeSet,
        client: &dyn LintClient,
    ) -> Result<Selection, RegistryError> {
        let accepted = self.accept(configuration, scope, client)?;

        let mut selection = Selection::new(self.group_by_scope);
        for candidate in accepted {
            match self.detectors.instantiate(&candidate.id) {
                Ok(detector) => selection.push(SelectedDetector {
                    id: candidate.id,
                    scope: candidate.scope,
                    detector,
                }),
                Err(error) => {
                    client.log(
                        Severity::Error,
                        Some(&error),
                        &format!("Can't initialize detector {}", candidate.id),
                    );
                    selection.failures.push(InitFailure {
                        detector: candidate.id,
                        error,
                    });
                }
            }
        }

        debug!(
            "Selected {} detectors for scope {} ({} failed to initialize)",
            selection.len(),
            scope,
            selection.failures.len()
        );

        Ok(selection)
    }

    fn accept(
        &self,
        configuration: &dyn Configuration,
        scope: ScopeSet,
        client: &dyn LintClient,
    ) -> Result<Vec<Accepted>, RegistryError> {
        let mut accepted: Vec<Accepted> = Vec::new();
        let mut positions: HashMap<DetectorId, usize> = HashMap::new();
        // The client is asked once per original detector
        let mut resolved: HashMap<&DetectorId, DetectorId> = HashMap::new();

        for issue in self.issues {
            let Some(original) = issue.detector() else {
                continue;
            };

            if !configuration.is_enabled(issue) || !scope.contains_all(issue.scope()) {
                continue;
            }

            let id = match resolved.get(original) {
                Some(id) => id.clone(),
                None => {
                    let replacement = client.replace_detector(original);
                    if !self.detectors.contains(&replacement) {
                        return Err(RegistryError::UnresolvedDetector {
                            issue: issue.id().to_string(),
                            detector: original.to_string(),
                            replacement: replacement.to_string(),
                        });
                    }
                    if replacement != *original {
                        debug!("Detector {} replaced by {}", original, replacement);
                    }
                    resolved.insert(original, replacement.clone());
                    replacement
                }
            };

            match positions.get(&id) {
                Some(&pos) => accepted[pos].scope.extend_from(issue.scope()),
                None => {
                    positions.insert(id.clone(), accepted.len());
                    accepted.push(Accepted {
                        id,
                        scope: issue.scope(),
                    });
                }
            }
        }

        Ok(accepted)
    }
}

/// A constructed detector together with the scopes it must see
pub struct SelectedDetector {
    id: DetectorId,
    scope: ScopeSet,
    detector: Box<dyn Detector>,
}

impl SelectedDetector {
    /// Id the detector was constructed from (after client substitution)
    pub fn id(&self) -> &DetectorId {
        &self.id
    }

    /// Union of the scopes of the issues that selected this detector
    pub fn scope(&self) -> ScopeSet {
        self.scope
    }

    pub fn detector(&self) -> &dyn Detector {
        self.detector.as_ref()
    }

    pub fn detector_mut(&mut self) -> &mut dyn Detector {
        self.detector.as_mut()
    }

    pub fn into_detector(self) -> Box<dyn Detector> {
        self.detector
    }
}

impl fmt::Debug for SelectedDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedDetector")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .finish()
    }
}

/// A detector whose constructor failed
#[derive(Debug)]
pub struct InitFailure {
    detector: DetectorId,
    error: anyhow::Error,
}

impl InitFailure {
    pub fn detector(&self) -> &DetectorId {
        &self.detector
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }
}

/// Result of one selection run
pub struct Selection {
    detectors: Vec<SelectedDetector>,
    /// Scope -> positions in `detectors`
    by_scope: Option<BTreeMap<Scope, Vec<usize>>>,
    failures: Vec<InitFailure>,
}

impl Selection {
    fn new(group_by_scope: bool) -> Self {
        Self {
            detectors: Vec::new(),
            by_scope: group_by_scope.then(BTreeMap::new),
            failures: Vec::new(),
        }
    }

    fn push(&mut self, selected: SelectedDetector) {
        let pos = self.detectors.len();
        if let Some(by_scope) = &mut self.by_scope {
            for scope in selected.scope.iter() {
                by_scope.entry(scope).or_default().push(pos);
            }
        }
        self.detectors.push(selected);
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Detectors in the order they were first selected
    pub fn iter(&self) -> impl Iterator<Item = &SelectedDetector> {
        self.detectors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SelectedDetector> {
        self.detectors.iter_mut()
    }

    pub fn get(&self, id: &DetectorId) -> Option<&SelectedDetector> {
        self.detectors.iter().find(|d| &d.id == id)
    }

    pub fn contains(&self, id: &DetectorId) -> bool {
        self.get(id).is_some()
    }

    /// Whether the scope grouping was built
    pub fn is_grouped(&self) -> bool {
        self.by_scope.is_some()
    }

    /// Scopes that have at least one detector (empty when not grouped)
    pub fn scopes(&self) -> impl Iterator<Item = Scope> + '_ {
        self.by_scope.iter().flat_map(|m| m.keys().copied())
    }

    /// Detectors to invoke while visiting `scope` (empty when not grouped)
    pub fn detectors_for(&self, scope: Scope) -> impl Iterator<Item = &SelectedDetector> + '_ {
        self.by_scope
            .as_ref()
            .and_then(|m| m.get(&scope))
            .into_iter()
            .flatten()
            .map(move |&pos| &self.detectors[pos])
    }

    /// Detectors whose constructor failed
    pub fn failures(&self) -> &[InitFailure] {
        &self.failures
    }

    pub fn into_detectors(self) -> Vec<SelectedDetector> {
        self.detectors
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("detectors", &self.detectors)
            .field("by_scope", &self.by_scope)
            .field("failures", &self.failures)
            .finish()
    }
}

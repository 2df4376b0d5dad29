//! Issue registry
//!
//! The [`Registry`] takes a snapshot of the catalog supplied by an
//! [`IssueProvider`], validates it, and answers lookups against it. The issue
//! index and the category list are derived from the snapshot on first use and
//! kept until [`Registry::reload`] takes a new one.

mod catalog;
mod index;

pub use catalog::{CompositeProvider, IssueCatalog, IssueProvider};

use crate::builtin::BuiltinIssueProvider;
use crate::client::LintClient;
use crate::config::Configuration;
use crate::detector::DetectorTable;
use crate::issue::{Category, Issue, ScopeSet, Severity};
use crate::select::{DetectorSelector, Selection};
use index::IssueIndex;
use miette::Diagnostic;
use std::collections::HashSet;
use std::sync::{LazyLock, OnceLock};
use thiserror::Error;
use tracing::{debug, info};

/// Issue reported by the frontend (not by a detector) when it cannot even
/// parse an XML file prior to analysis
pub static PARSER_ERROR: LazyLock<Issue> = LazyLock::new(|| {
    Issue::new(
        "XmlParserError",
        Category::CORRECTNESS,
        Severity::Error,
        ScopeSet::RESOURCE_FILE,
    )
    .with_brief("Finds XML files that contain fatal parser errors")
    .with_explanation("XML files must be parsable.")
    .with_priority(10)
});

/// Catalog integrity errors
#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    #[error("Duplicate issue id `{0}` in catalog")]
    #[diagnostic(
        code(lintregistry::duplicate_issue),
        help("issue ids must be unique; use a CompositeProvider to override an issue")
    )]
    DuplicateIssue(String),

    #[error("Issue `{0}` does not require any scope")]
    #[diagnostic(code(lintregistry::empty_scope))]
    EmptyScope(String),

    #[error("Issue `{issue}` has priority {priority}, expected 1 to 10")]
    #[diagnostic(code(lintregistry::invalid_priority))]
    InvalidPriority { issue: String, priority: u8 },

    #[error("Issue `{issue}` references unregistered detector `{detector}`")]
    #[diagnostic(
        code(lintregistry::unknown_detector),
        help("register a constructor for the detector in the provider's detector table")
    )]
    UnknownDetector { issue: String, detector: String },

    #[error("Detector `{detector}` of issue `{issue}` resolved to `{replacement}`, which has no constructor")]
    #[diagnostic(
        code(lintregistry::unresolved_detector),
        help("a client replacing a detector must return an id registered in the detector table")
    )]
    UnresolvedDetector {
        issue: String,
        detector: String,
        replacement: String,
    },
}

/// Registry of lint issues and the detectors that find them
pub struct Registry {
    provider: Box<dyn IssueProvider>,
    issues: Vec<Issue>,
    detectors: DetectorTable,
    index: OnceLock<IssueIndex>,
    categories: OnceLock<Vec<Category>>,
}

impl Registry {
    /// Create a registry over `provider`, validating its catalog
    pub fn new(provider: impl IssueProvider + 'static) -> Result<Self, RegistryError> {
        let provider: Box<dyn IssueProvider> = Box::new(provider);
        let (issues, detectors) = snapshot(provider.as_ref())?;

        debug!(
            "Registry created with {} issues and {} detectors",
            issues.len(),
            detectors.len()
        );

        Ok(Self {
            provider,
            issues,
            detectors,
            index: OnceLock::new(),
            categories: OnceLock::new(),
        })
    }

    /// Registry over the built-in Android catalog
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(BuiltinIssueProvider)
    }

    /// Take a fresh snapshot of the provider's catalog and drop derived caches
    ///
    /// On error the previous snapshot is kept.
    pub fn reload(&mut self) -> Result<(), RegistryError> {
        let (issues, detectors) = snapshot(self.provider.as_ref())?;
        self.issues = issues;
        self.detectors = detectors;
        self.index = OnceLock::new();
        self.categories = OnceLock::new();

        info!("Registry reloaded: {} issues", self.issues.len());
        Ok(())
    }

    /// Every issue in the catalog, including those that may be disabled
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Constructors of the detectors referenced by the catalog
    pub fn detectors(&self) -> &DetectorTable {
        &self.detectors
    }

    /// Issue with the given id, if any
    pub fn get_issue(&self, id: &str) -> Option<&Issue> {
        let index = self.index.get_or_init(|| {
            debug!("Building issue index");
            IssueIndex::build(&self.issues)
        });
        index.get(&self.issues, id)
    }

    pub fn is_issue_id(&self, id: &str) -> bool {
        self.get_issue(id).is_some()
    }

    /// Distinct categories of the catalog, highest priority first
    pub fn categories(&self) -> &[Category] {
        self.categories
            .get_or_init(|| index::collect_categories(&self.issues))
    }

    /// True if `name` is the name or full name of a catalog category
    pub fn is_category_name(&self, name: &str) -> bool {
        self.categories()
            .iter()
            .any(|c| c.name() == name || c.full_name() == name)
    }

    /// Instantiate the detectors needed for a run over `scope`
    pub fn create_detectors(
        &self,
        configuration: &dyn Configuration,
        scope: ScopeSet,
        client: &dyn LintClient,
    ) -> Result<Selection, RegistryError> {
        DetectorSelector::new(&self.issues, &self.detectors).select(configuration, scope, client)
    }

    /// Like [`Registry::create_detectors`], also grouping the detectors by the
    /// scopes they need
    pub fn create_detectors_by_scope(
        &self,
        configuration: &dyn Configuration,
        scope: ScopeSet,
        client: &dyn LintClient,
    ) -> Result<Selection, RegistryError> {
        DetectorSelector::new(&self.issues, &self.detectors)
            .group_by_scope(true)
            .select(configuration, scope, client)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("issues", &self.issues.len())
            .field("detectors", &self.detectors)
            .finish()
    }
}

/// Read and validate the provider's catalog
fn snapshot(provider: &dyn IssueProvider) -> Result<(Vec<Issue>, DetectorTable), RegistryError> {
    let mut issues = provider.issues();
    let detectors = provider.detectors();

    if !issues.iter().any(|i| i.id() == PARSER_ERROR.id()) {
        issues.push(PARSER_ERROR.clone());
    }

    validate(&issues, &detectors)?;
    Ok((issues, detectors))
}

fn validate(issues: &[Issue], detectors: &DetectorTable) -> Result<(), RegistryError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(issues.len());

    for issue in issues {
        if !seen.insert(issue.id()) {
            return Err(RegistryError::DuplicateIssue(issue.id().to_string()));
        }

        if issue.scope().is_empty() {
            return Err(RegistryError::EmptyScope(issue.id().to_string()));
        }

        if !(1..=10).contains(&issue.priority()) {
            return Err(RegistryError::InvalidPriority {
                issue: issue.id().to_string(),
                priority: issue.priority(),
            });
        }

        if let Some(detector) = issue.detector() {
            if !detectors.contains(detector) {
                return Err(RegistryError::UnknownDetector {
                    issue: issue.id().to_string(),
                    detector: detector.to_string(),
                });
            }
        }
    }

    Ok(())
}

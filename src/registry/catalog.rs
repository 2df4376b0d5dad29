use crate::detector::{DetectorFactory, DetectorId, DetectorTable};
use crate::issue::Issue;
use std::collections::{HashMap, HashSet};

/// Source of the issue catalog
///
/// Providers must return the same catalog on every call; the registry takes a
/// snapshot and derives its caches from it.
pub trait IssueProvider: Send + Sync {
    /// Every known issue, including those disabled by default
    fn issues(&self) -> Vec<Issue>;

    /// Constructors for the detectors referenced by [`IssueProvider::issues`]
    fn detectors(&self) -> DetectorTable;
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct IssueCatalog {
    issues: Vec<Issue>,
    detectors: DetectorTable,
}

impl IssueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    pub fn with_issues(mut self, issues: impl IntoIterator<Item = Issue>) -> Self {
        self.issues.extend(issues);
        self
    }

    pub fn with_detector(mut self, id: DetectorId, factory: DetectorFactory) -> Self {
        self.detectors.register(id, factory);
        self
    }
}

impl IssueProvider for IssueCatalog {
    fn issues(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    fn detectors(&self) -> DetectorTable {
        self.detectors.clone()
    }
}

/// Catalog assembled from several providers
///
/// Later providers extend earlier ones. An issue whose id was supplied by an
/// earlier provider replaces that definition in place, and detector
/// constructors registered later win. An id repeated within one provider's
/// own list is passed through unchanged.
#[derive(Default)]
pub struct CompositeProvider {
    providers: Vec<Box<dyn IssueProvider>>,
}

impl CompositeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl IssueProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl IssueProvider for CompositeProvider {
    fn issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = Vec::new();
        // Ids supplied by earlier providers -> position in `issues`
        let mut earlier: HashMap<String, usize> = HashMap::new();

        for provider in &self.providers {
            let mut replaced: HashSet<String> = HashSet::new();
            let start = issues.len();

            for issue in provider.issues() {
                match earlier.get(issue.id()) {
                    Some(&pos) if replaced.insert(issue.id().to_string()) => issues[pos] = issue,
                    // Repeats within one provider are kept for validation to reject
                    _ => issues.push(issue),
                }
            }

            for (pos, issue) in issues.iter().enumerate().skip(start) {
                earlier.entry(issue.id().to_string()).or_insert(pos);
            }
        }

        issues
    }

    fn detectors(&self) -> DetectorTable {
        let mut table = DetectorTable::new();
        for provider in &self.providers {
            table.extend(provider.detectors());
        }
        table
    }
}

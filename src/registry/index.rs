// Lookup structures derived from a catalog snapshot

use crate::issue::{Category, Issue};
use std::collections::{BTreeSet, HashMap};

/// Mapping from issue id to its position in the snapshot
#[derive(Debug, Default)]
pub(crate) struct IssueIndex {
    positions: HashMap<String, usize>,
}

impl IssueIndex {
    /// Build the index; ids are assumed unique (checked when the snapshot is taken)
    pub(crate) fn build(issues: &[Issue]) -> Self {
        let mut positions = HashMap::with_capacity(issues.len());
        for (pos, issue) in issues.iter().enumerate() {
            positions.insert(issue.id().to_string(), pos);
        }
        Self { positions }
    }

    pub(crate) fn get<'a>(&self, issues: &'a [Issue], id: &str) -> Option<&'a Issue> {
        self.positions.get(id).and_then(|&pos| issues.get(pos))
    }

    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Distinct categories of `issues`, sorted by the category order
pub(crate) fn collect_categories(issues: &[Issue]) -> Vec<Category> {
    let categories: BTreeSet<Category> = issues.iter().map(|i| i.category().clone()).collect();
    categories.into_iter().collect()
}

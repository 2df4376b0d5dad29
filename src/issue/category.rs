//! Issue categories
//!
//! Categories group issues for filtering and reporting. A category may have a
//! parent (`Correctness:Messages`), in which case its full name joins both.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A grouping label attached to issues
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    name: Cow<'static, str>,
    parent: Option<Cow<'static, str>>,
    priority: u32,
}

impl Category {
    pub const LINT: Category = Category::builtin("Lint", None, 110);
    pub const CORRECTNESS: Category = Category::builtin("Correctness", None, 100);
    pub const MESSAGES: Category = Category::builtin("Messages", Some("Correctness"), 95);
    pub const SECURITY: Category = Category::builtin("Security", None, 90);
    pub const PERFORMANCE: Category = Category::builtin("Performance", None, 80);
    pub const USABILITY: Category = Category::builtin("Usability", None, 70);
    pub const TYPOGRAPHY: Category = Category::builtin("Typography", Some("Usability"), 69);
    pub const ICONS: Category = Category::builtin("Icons", Some("Usability"), 68);
    pub const ACCESSIBILITY: Category = Category::builtin("Accessibility", None, 60);
    pub const I18N: Category = Category::builtin("Internationalization", None, 50);

    const fn builtin(name: &'static str, parent: Option<&'static str>, priority: u32) -> Self {
        let parent = match parent {
            Some(p) => Some(Cow::Borrowed(p)),
            None => None,
        };
        Self {
            name: Cow::Borrowed(name),
            parent,
            priority,
        }
    }

    /// Create a top-level category
    pub fn new(name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            parent: None,
            priority,
        }
    }

    /// Create a category nested under `parent`
    pub fn with_parent(name: impl Into<String>, parent: &Category, priority: u32) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            parent: Some(Cow::Owned(parent.full_name())),
            priority,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full name of the parent category, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// `Parent:Name` for nested categories, `Name` otherwise
    pub fn full_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{}:{}", parent, self.name),
            None => self.name.to_string(),
        }
    }

    /// True if `name` names this category or one of its ancestors
    pub fn matches(&self, name: &str) -> bool {
        if self.name == name || self.full_name() == name {
            return true;
        }
        match &self.parent {
            // Parent full names are themselves `A:B` paths
            Some(parent) => parent == name || parent.split(':').any(|p| p == name),
            None => false,
        }
    }
}

impl Ord for Category {
    /// Higher priority first, then alphabetical by full name
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.full_name().cmp(&other.full_name()))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

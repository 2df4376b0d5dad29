//! Detector implementations and their constructors
//!
//! Detectors are referenced by [`DetectorId`] rather than by instance, so a
//! catalog can describe many issues backed by the same implementation. The
//! [`DetectorTable`] maps each id to a zero-argument constructor that the
//! selector calls at most once per run.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Trait for lint detectors
///
/// Detectors perform the actual analysis for one or more issues; that logic
/// lives with each implementation and is driven by the scanning frontend.
pub trait Detector: Send {
    /// Name used in diagnostics
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Identifier of a detector implementation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DetectorId(Cow<'static, str>);

impl DetectorId {
    pub const fn from_static(id: &'static str) -> Self {
        DetectorId(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        DetectorId(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DetectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-argument detector constructor
pub type DetectorFactory = fn() -> anyhow::Result<Box<dyn Detector>>;

/// Constructor for detectors that are built with [`Default`]
pub fn default_factory<D: Detector + Default + 'static>() -> anyhow::Result<Box<dyn Detector>> {
    Ok(Box::new(D::default()))
}

/// Mapping from detector id to constructor
#[derive(Clone, Default)]
pub struct DetectorTable {
    factories: HashMap<DetectorId, DetectorFactory>,
}

impl DetectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor, returning the one it replaces
    pub fn register(&mut self, id: DetectorId, factory: DetectorFactory) -> Option<DetectorFactory> {
        self.factories.insert(id, factory)
    }

    pub fn with(mut self, id: DetectorId, factory: DetectorFactory) -> Self {
        self.register(id, factory);
        self
    }

    /// Merge `other` into this table; entries from `other` win
    pub fn extend(&mut self, other: DetectorTable) {
        self.factories.extend(other.factories);
    }

    pub fn get(&self, id: &DetectorId) -> Option<DetectorFactory> {
        self.factories.get(id).copied()
    }

    pub fn contains(&self, id: &DetectorId) -> bool {
        self.factories.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&DetectorId> {
        let mut ids: Vec<_> = self.factories.keys().collect();
        ids.sort();
        ids
    }

    /// Run the constructor registered for `id`
    pub fn instantiate(&self, id: &DetectorId) -> anyhow::Result<Box<dyn Detector>> {
        match self.get(id) {
            Some(factory) => factory(),
            None => anyhow::bail!("No constructor registered for detector {}", id),
        }
    }
}

impl fmt::Debug for DetectorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorTable")
            .field("detectors", &self.ids())
            .finish()
    }
}

//! lintregistry - Issue registry and detector selection for Android lint checks
//!
//! This library holds the catalog of known lint issues and works out, for one
//! analysis run, which detectors have to be instantiated.
//!
//! # Architecture
//!
//! The selection pipeline consists of:
//! 1. **Catalog** - An [`IssueProvider`] supplies issues and detector constructors
//! 2. **Registry** - A validated snapshot with cached id and category lookups
//! 3. **Configuration** - Decides which issues are enabled for the run
//! 4. **Selection** - Accepts detectors whose issues are enabled and in scope,
//!    applies client overrides, and instantiates each detector once
//! 5. **Grouping** - Files the instances under the scopes they need, so the
//!    scanner only invokes them in matching phases

pub mod builtin;
pub mod client;
pub mod config;
pub mod detector;
pub mod issue;
pub mod registry;
pub mod select;

pub use builtin::BuiltinIssueProvider;
pub use client::{DefaultClient, LintClient};
pub use config::{Configuration, DefaultConfiguration, LintConfig};
pub use detector::{default_factory, Detector, DetectorFactory, DetectorId, DetectorTable};
pub use issue::{Category, Issue, Scope, ScopeSet, Severity};
pub use registry::{
    CompositeProvider, IssueCatalog, IssueProvider, Registry, RegistryError, PARSER_ERROR,
};
pub use select::{DetectorSelector, InitFailure, SelectedDetector, Selection};

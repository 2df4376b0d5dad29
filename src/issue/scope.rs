//! Analysis scopes
//!
//! A [`Scope`] names one kind of artifact a detector needs to see during a run
//! (a single resource file, every Java file of the project, the manifest...).
//! Issues declare the set of scopes they require as a [`ScopeSet`], and the
//! selector only runs a detector when the run covers everything its issue needs.

use std::fmt;

/// Kind of artifact visited during an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// A single XML resource file, checked in isolation
    ResourceFile,
    /// All resource files of the project (cross-file checks)
    AllResourceFiles,
    /// A single Java source file
    JavaFile,
    /// All Java source files of the project
    AllJavaFiles,
    /// A single compiled class file
    ClassFile,
    /// All class files of the project
    AllClassFiles,
    /// The AndroidManifest.xml file
    Manifest,
    /// The ProGuard configuration file
    ProguardFile,
    /// A .properties file
    PropertyFile,
    /// A Gradle build file
    GradleFile,
}

impl Scope {
    /// Every scope, in declaration order
    pub const ALL: [Scope; 10] = [
        Scope::ResourceFile,
        Scope::AllResourceFiles,
        Scope::JavaFile,
        Scope::AllJavaFiles,
        Scope::ClassFile,
        Scope::AllClassFiles,
        Scope::Manifest,
        Scope::ProguardFile,
        Scope::PropertyFile,
        Scope::GradleFile,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ResourceFile => "resource-file",
            Scope::AllResourceFiles => "all-resource-files",
            Scope::JavaFile => "java-file",
            Scope::AllJavaFiles => "all-java-files",
            Scope::ClassFile => "class-file",
            Scope::AllClassFiles => "all-class-files",
            Scope::Manifest => "manifest",
            Scope::ProguardFile => "proguard-file",
            Scope::PropertyFile => "property-file",
            Scope::GradleFile => "gradle-file",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of [`Scope`]s, stored as a bit set
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScopeSet(u16);

impl ScopeSet {
    pub const EMPTY: ScopeSet = ScopeSet(0);
    pub const RESOURCE_FILE: ScopeSet = ScopeSet::of(Scope::ResourceFile);
    pub const ALL_RESOURCES: ScopeSet = ScopeSet::of(Scope::AllResourceFiles);
    pub const JAVA_FILE: ScopeSet = ScopeSet::of(Scope::JavaFile);
    pub const ALL_JAVA_FILES: ScopeSet = ScopeSet::of(Scope::AllJavaFiles);
    pub const CLASS_FILE: ScopeSet = ScopeSet::of(Scope::ClassFile);
    pub const MANIFEST: ScopeSet = ScopeSet::of(Scope::Manifest);
    pub const PROGUARD_FILE: ScopeSet = ScopeSet::of(Scope::ProguardFile);
    pub const GRADLE_FILE: ScopeSet = ScopeSet::of(Scope::GradleFile);
    pub const ALL: ScopeSet = ScopeSet((1 << Scope::ALL.len()) - 1);

    /// Set holding a single scope
    pub const fn of(scope: Scope) -> Self {
        ScopeSet(scope.bit())
    }

    /// Const-friendly builder: `ScopeSet::of(a).with(b)`
    pub const fn with(self, scope: Scope) -> Self {
        ScopeSet(self.0 | scope.bit())
    }

    pub const fn union(self, other: ScopeSet) -> Self {
        ScopeSet(self.0 | other.0)
    }

    pub const fn intersection(self, other: ScopeSet) -> Self {
        ScopeSet(self.0 & other.0)
    }

    /// True if every scope of `other` is also in `self`
    pub const fn contains_all(self, other: ScopeSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn contains(self, scope: Scope) -> bool {
        self.0 & scope.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn insert(&mut self, scope: Scope) {
        self.0 |= scope.bit();
    }

    pub fn extend_from(&mut self, other: ScopeSet) {
        self.0 |= other.0;
    }

    /// Scopes in the set, in [`Scope`] declaration order
    pub fn iter(self) -> impl Iterator<Item = Scope> {
        Scope::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    /// Whether a detector with this scope can check one file at a time
    ///
    /// True for a single per-file scope, and for the pair of a per-file scope
    /// with its project-wide counterpart (the detector can then fall back to
    /// checking only the given file).
    pub fn is_single_file(self) -> bool {
        const PAIRS: [(Scope, Scope); 3] = [
            (Scope::JavaFile, Scope::AllJavaFiles),
            (Scope::ResourceFile, Scope::AllResourceFiles),
            (Scope::ClassFile, Scope::AllClassFiles),
        ];

        match self.len() {
            1 => {
                self.contains(Scope::ResourceFile)
                    || self.contains(Scope::JavaFile)
                    || self.contains(Scope::ClassFile)
                    || self.contains(Scope::Manifest)
                    || self.contains(Scope::ProguardFile)
                    || self.contains(Scope::PropertyFile)
                    || self.contains(Scope::GradleFile)
            }
            2 => PAIRS
                .iter()
                .any(|&(file, all)| self == ScopeSet::of(file).with(all)),
            _ => false,
        }
    }
}

impl FromIterator<Scope> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        let mut set = ScopeSet::EMPTY;
        for scope in iter {
            set.insert(scope);
        }
        set
    }
}

impl From<Scope> for ScopeSet {
    fn from(scope: Scope) -> Self {
        ScopeSet::of(scope)
    }
}

impl fmt::Debug for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|s| s.as_str()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

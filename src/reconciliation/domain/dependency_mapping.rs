use std::collections::BTreeMap;

/// Resolved module versions of one project snapshot
///
/// Maps a module identifier to the version string the project builds
/// against. A mapping is built once per `go list -m all` run and never
/// edited afterwards; a new snapshot produces a new mapping. Iteration
/// is ordered by module identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMapping {
    versions: BTreeMap<String, String>,
}

impl DependencyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a module version, replacing any previous version of the module
    pub(crate) fn insert(&mut self, module: String, version: String) {
        self.versions.insert(module, version);
    }

    pub fn version_of(&self, module: &str) -> Option<&str> {
        self.versions.get(module).map(String::as_str)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.versions.contains_key(module)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Iterates over `(module, version)` pairs in module order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions
            .iter()
            .map(|(module, version)| (module.as_str(), version.as_str()))
    }
}

impl<M, V> FromIterator<(M, V)> for DependencyMapping
where
    M: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (M, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (module, version) in iter {
            mapping.insert(module.into(), version.into());
        }
        mapping
    }
}

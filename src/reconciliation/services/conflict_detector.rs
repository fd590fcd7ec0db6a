use crate::reconciliation::domain::{Conflict, DependencyMapping};

/// ConflictDetector service for comparing two snapshots
///
/// Pure comparison with no I/O. Versions are opaque strings and are only
/// ever compared for equality.
pub struct ConflictDetector;

impl ConflictDetector {
    /// Returns every module present in both mappings with differing versions
    ///
    /// Conflicts are ordered by module identifier.
    pub fn detect(core: &DependencyMapping, other: &DependencyMapping) -> Vec<Conflict> {
        core.iter()
            .filter_map(|(module, core_version)| {
                other
                    .version_of(module)
                    .filter(|other_version| *other_version != core_version)
                    .map(|other_version| Conflict::new(module, core_version, other_version))
            })
            .collect()
    }
}

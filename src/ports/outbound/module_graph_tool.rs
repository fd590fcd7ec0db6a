use crate::shared::Result;
use std::path::Path;

/// ModuleGraphTool port for querying and editing a Go module
///
/// Every operation takes the project directory explicitly; implementations
/// must run in that directory without touching the process working
/// directory. Mutations change `go.mod`/`go.sum` on disk and cannot be
/// undone through this port.
pub trait ModuleGraphTool {
    /// Lists the fully resolved module graph (`go list -m all`)
    ///
    /// Returns the raw standard output. The first line is the project
    /// itself. Each call must reflect the project's current state.
    ///
    /// # Errors
    /// Returns an error if the query cannot be run or exits non-zero
    fn list_modules(&self, project_dir: &Path) -> Result<String>;

    /// Pins `module` to exactly `version` in the project's requirements
    /// (`go mod edit -require=<module>@<version>`)
    ///
    /// # Errors
    /// Returns an error if the edit cannot be run or exits non-zero
    fn require(&self, project_dir: &Path, module: &str, version: &str) -> Result<()>;

    /// Fetches `module@version` and re-resolves the graph (`go get <module>@<version>`)
    ///
    /// # Errors
    /// Returns an error if the fetch cannot be run or exits non-zero
    fn upgrade(&self, project_dir: &Path, module: &str, version: &str) -> Result<()>;
}

impl<T: ModuleGraphTool + ?Sized> ModuleGraphTool for &T {
    fn list_modules(&self, project_dir: &Path) -> Result<String> {
        (**self).list_modules(project_dir)
    }

    fn require(&self, project_dir: &Path, module: &str, version: &str) -> Result<()> {
        (**self).require(project_dir, module, version)
    }

    fn upgrade(&self, project_dir: &Path, module: &str, version: &str) -> Result<()> {
        (**self).upgrade(project_dir, module, version)
    }
}

use serde::Serialize;
use std::fmt;

/// A module resolved to different versions by the core and the plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub module: String,
    pub core_version: String,
    pub plugin_version: String,
}

impl Conflict {
    pub fn new(
        module: impl Into<String>,
        core_version: impl Into<String>,
        plugin_version: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            core_version: core_version.into(),
            plugin_version: plugin_version.into(),
        }
    }

    /// The `module@version` target that pins the plugin to the core's version
    pub fn core_target(&self) -> String {
        format!("{}@{}", self.module, self.core_version)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: core is using version {} but the plugin is using version {}",
            self.module, self.core_version, self.plugin_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_target() {
        let conflict = Conflict::new("golang.org/x/text", "v0.3.2", "v0.3.0");
        assert_eq!(conflict.core_target(), "golang.org/x/text@v0.3.2");
    }

    #[test]
    fn test_display_names_both_versions() {
        let conflict = Conflict::new("golang.org/x/text", "v0.3.2", "v0.3.0");
        let display = conflict.to_string();
        assert!(display.contains("golang.org/x/text"));
        assert!(display.contains("core is using version v0.3.2"));
        assert!(display.contains("plugin is using version v0.3.0"));
    }
}

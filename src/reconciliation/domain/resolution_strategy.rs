use serde::{Deserialize, Serialize};
use std::fmt;

/// A way of forcing the plugin onto the core's version of a module
///
/// Strategies are tried in order, one round each. A requirement edit is
/// cheap but does not stick for every module (some versions are pulled up
/// again by transitive minimum-version floors); a fetch/upgrade re-resolves
/// the graph and usually does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionStrategy {
    /// `go mod edit -require=<module>@<version>`
    #[serde(alias = "require")]
    RequireEdit,
    /// `go get <module>@<version>`
    #[serde(alias = "get")]
    FetchUpgrade,
}

impl ResolutionStrategy {
    /// The default strategy order
    pub fn default_order() -> Vec<ResolutionStrategy> {
        vec![ResolutionStrategy::RequireEdit, ResolutionStrategy::FetchUpgrade]
    }

    /// Renders the command line this strategy runs for `target` (`module@version`)
    pub fn command_line(&self, target: &str) -> String {
        match self {
            ResolutionStrategy::RequireEdit => format!("go mod edit -require={}", target),
            ResolutionStrategy::FetchUpgrade => format!("go get {}", target),
        }
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStrategy::RequireEdit => write!(f, "require-edit"),
            ResolutionStrategy::FetchUpgrade => write!(f, "fetch-upgrade"),
        }
    }
}

impl std::str::FromStr for ResolutionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "require-edit" | "require" => Ok(ResolutionStrategy::RequireEdit),
            "fetch-upgrade" | "get" => Ok(ResolutionStrategy::FetchUpgrade),
            _ => Err(format!(
                "Invalid strategy: {}. Please specify 'require-edit' or 'fetch-upgrade'",
                s
            )),
        }
    }
}

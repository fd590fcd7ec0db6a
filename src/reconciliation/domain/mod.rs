pub mod conflict;
pub mod dependency_mapping;
pub mod resolution_strategy;

pub use conflict::Conflict;
pub use dependency_mapping::DependencyMapping;
pub use resolution_strategy::ResolutionStrategy;

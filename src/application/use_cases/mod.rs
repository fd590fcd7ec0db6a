/// Use cases module containing application business logic orchestration
mod reconcile_dependencies;

pub use reconcile_dependencies::ReconcileDependenciesUseCase;

//! gomoderator - Go module version reconciliation between a core and its plugins
//!
//! A plugin built against a core Go project must resolve shared modules to the
//! exact versions the core uses. This library detects version conflicts between
//! the two module graphs and drives the Go toolchain to align the plugin,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`reconciliation`): Dependency mappings, conflicts and strategies
//! - **Application Layer** (`application`): The reconciliation use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Go CLI, console, filesystem and formatter implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gomoderator::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ReconcileDependenciesUseCase::new(
//!     GoCommandTool::default(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReconcileRequest::builder()
//!     .core_path("../core")
//!     .plugin_path(".")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format(&response)?;
//! println!("{}", output);
//! std::process::exit(response.exit_code().as_i32());
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod reconciliation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::go::GoCommandTool;
    pub use crate::application::dto::{
        Outcome, OutputFormat, ReconcileRequest, ReconcileResponse, RoundRecord,
    };
    pub use crate::application::use_cases::ReconcileDependenciesUseCase;
    pub use crate::ports::outbound::{
        ModuleGraphTool, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::reconciliation::domain::{Conflict, DependencyMapping, ResolutionStrategy};
    pub use crate::reconciliation::services::{
        ConflictDetector, MalformedRecordPolicy, ModuleFilter, ParsedSnapshot, RecordParser,
    };
    pub use crate::shared::error::{ExitCode, ReconcileError};
    pub use crate::shared::path_validation::is_pathname_valid;
    pub use crate::shared::Result;
}

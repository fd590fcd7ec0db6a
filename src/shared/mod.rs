/// Shared kernel - error types, exit codes and helpers used across layers
pub mod error;
pub mod path_validation;
pub mod result;

pub use result::Result;

/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod reconcile_request;
mod reconcile_response;

pub use output_format::OutputFormat;
pub use reconcile_request::{ReconcileRequest, ReconcileRequestBuilder};
pub use reconcile_response::{Outcome, ReconcileResponse, RoundRecord};

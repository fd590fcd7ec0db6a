/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (go toolchain, console, files, etc.).
pub mod formatter;
pub mod module_graph_tool;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use module_graph_tool::ModuleGraphTool;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;

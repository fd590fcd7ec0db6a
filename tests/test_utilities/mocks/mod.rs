/// Mock implementations for testing
mod mock_module_graph_tool;
mod mock_progress_reporter;

pub use mock_module_graph_tool::MockModuleGraphTool;
pub use mock_progress_reporter::MockProgressReporter;

mod go_command_tool;

pub use go_command_tool::{GoCommandTool, DEFAULT_GO_BINARY};

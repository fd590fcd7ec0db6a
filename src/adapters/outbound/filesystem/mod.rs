/// Filesystem adapters for presenting the final report
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};

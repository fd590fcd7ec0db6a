mod conflict_detector;
mod module_filter;
mod record_parser;

pub use conflict_detector::ConflictDetector;
pub use module_filter::ModuleFilter;
pub use record_parser::{MalformedRecordPolicy, ParsedSnapshot, RecordParser};

use crate::reconciliation::domain::DependencyMapping;
use crate::shared::error::ReconcileError;
use crate::shared::Result;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Marker separating a module from its replacement in `go list -m all` output
const REPLACEMENT_MARKER: &str = " => ";

/// `<module> <version>` where the version token starts with `v`.
/// Anything after the version (annotations such as `(retracted)`) is ignored.
const RECORD_PATTERN: &str = r"^\s*(?P<module>\S+)\s+(?P<version>v\S*)";

fn record_regex() -> &'static Regex {
    static RECORD_REGEX: OnceLock<Regex> = OnceLock::new();
    RECORD_REGEX.get_or_init(|| Regex::new(RECORD_PATTERN).expect("record pattern is valid"))
}

/// What to do with a record that has no recognizable version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedRecordPolicy {
    /// Leave the record out of the mapping and remember it
    #[default]
    Skip,
    /// Abort the run
    Error,
}

/// A parsed snapshot together with the records that could not be parsed
#[derive(Debug, Clone, Default)]
pub struct ParsedSnapshot {
    pub mapping: DependencyMapping,
    pub skipped: Vec<String>,
}

/// RecordParser turns `go list -m all` output into a DependencyMapping
///
/// Each record is either `<module> <version>` or
/// `<module> <version> => <replacement> <version>`. For replaced modules
/// only the replacement target is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser {
    policy: MalformedRecordPolicy,
}

impl RecordParser {
    pub fn new(policy: MalformedRecordPolicy) -> Self {
        Self { policy }
    }

    /// Splits raw listing output into dependency records
    ///
    /// The first line names the project itself and is always dropped,
    /// so N lines of output yield N-1 records.
    pub fn records_from_listing(output: &str) -> Vec<&str> {
        output.lines().skip(1).collect()
    }

    /// Parses a single record into `(module, version)`
    ///
    /// Returns `None` when the record carries no version token.
    pub fn parse_record(record: &str) -> Option<(String, String)> {
        let target = match record.split_once(REPLACEMENT_MARKER) {
            Some((_, replacement)) => replacement,
            None => record,
        };

        let captures = record_regex().captures(target)?;
        Some((
            captures["module"].to_string(),
            captures["version"].to_string(),
        ))
    }

    /// Builds a mapping from records; later records win on duplicate modules
    ///
    /// # Errors
    /// Returns `ReconcileError::MalformedRecord` for the first unparseable
    /// record when the policy is `MalformedRecordPolicy::Error`.
    pub fn parse_records<'a, I>(&self, records: I) -> Result<ParsedSnapshot>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut snapshot = ParsedSnapshot::default();

        for record in records {
            if record.trim().is_empty() {
                continue;
            }

            match Self::parse_record(record) {
                Some((module, version)) => snapshot.mapping.insert(module, version),
                None => match self.policy {
                    MalformedRecordPolicy::Skip => {
                        tracing::debug!(record, "skipping dependency record without a version");
                        snapshot.skipped.push(record.to_string());
                    }
                    MalformedRecordPolicy::Error => {
                        return Err(ReconcileError::MalformedRecord {
                            record: record.to_string(),
                        }
                        .into());
                    }
                },
            }
        }

        Ok(snapshot)
    }

    /// Parses full listing output, dropping the leading self-reference line
    pub fn parse_listing(&self, output: &str) -> Result<ParsedSnapshot> {
        self.parse_records(Self::records_from_listing(output))
    }
}

use crate::reconciliation::domain::{Conflict, ResolutionStrategy};
use crate::shared::error::ExitCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// How a reconciliation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    /// The snapshots agreed from the start; nothing was changed
    NoConflicts,
    /// All conflicts were gone after the given number of fix rounds
    Resolved { rounds: usize },
    /// Conflicts survived every fix round
    Unresolved,
    /// Dry run found conflicts and left them alone
    ConflictsDetected,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::NoConflicts | Outcome::Resolved { .. } => ExitCode::Success,
            Outcome::Unresolved | Outcome::ConflictsDetected => ExitCode::ConflictsRemain,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == ExitCode::Success
    }
}

/// One fix round: the strategy applied and the conflicts it was applied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: usize,
    pub strategy: ResolutionStrategy,
    pub attempted: Vec<Conflict>,
}

/// ReconcileResponse - Result of a reconciliation run
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResponse {
    pub core_path: PathBuf,
    pub plugin_path: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub outcome: Outcome,
    /// Conflicts found before any fix was attempted
    pub initial_conflicts: Vec<Conflict>,
    pub rounds: Vec<RoundRecord>,
    /// Conflicts still present after the last check
    pub remaining_conflicts: Vec<Conflict>,
    /// Listing records that could not be parsed and were left out
    pub skipped_records: Vec<String>,
}

impl ReconcileResponse {
    pub fn exit_code(&self) -> ExitCode {
        self.outcome.exit_code()
    }

    /// Number of mutation commands issued during the run
    pub fn fixes_attempted(&self) -> usize {
        self.rounds.iter().map(|round| round.attempted.len()).sum()
    }
}

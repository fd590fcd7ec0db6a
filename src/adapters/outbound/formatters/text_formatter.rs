use crate::application::dto::{Outcome, ReconcileResponse};
use crate::ports::outbound::ReportFormatter;
use crate::reconciliation::domain::Conflict;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter for a human-readable reconciliation summary
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_conflicts(output: &mut String, conflicts: &[Conflict]) -> std::fmt::Result {
        for conflict in conflicts {
            writeln!(
                output,
                "  - {}: core {}, plugin {}",
                conflict.module, conflict.core_version, conflict.plugin_version
            )?;
        }
        Ok(())
    }

    fn outcome_line(outcome: &Outcome) -> String {
        match outcome {
            Outcome::NoConflicts => "no conflicts to resolve".to_string(),
            Outcome::Resolved { rounds } => {
                format!("all conflicts resolved after {} round(s)", rounds)
            }
            Outcome::Unresolved => "failed to resolve all conflicts".to_string(),
            Outcome::ConflictsDetected => "conflicts detected (dry run, nothing changed)".to_string(),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &ReconcileResponse) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Go module reconciliation report")?;
        writeln!(output, "Core:   {}", response.core_path.display())?;
        writeln!(output, "Plugin: {}", response.plugin_path.display())?;
        writeln!(output)?;

        writeln!(
            output,
            "Initial conflicts: {}",
            response.initial_conflicts.len()
        )?;
        Self::write_conflicts(&mut output, &response.initial_conflicts)?;

        for round in &response.rounds {
            writeln!(output)?;
            writeln!(
                output,
                "Round {} ({}): {} fix(es) attempted",
                round.round,
                round.strategy,
                round.attempted.len()
            )?;
            for conflict in &round.attempted {
                writeln!(
                    output,
                    "  - {}",
                    round.strategy.command_line(&conflict.core_target())
                )?;
            }
        }

        if !response.remaining_conflicts.is_empty() {
            writeln!(output)?;
            writeln!(
                output,
                "Remaining conflicts: {}",
                response.remaining_conflicts.len()
            )?;
            Self::write_conflicts(&mut output, &response.remaining_conflicts)?;
        }

        if !response.skipped_records.is_empty() {
            writeln!(output)?;
            writeln!(
                output,
                "Skipped records without a version: {}",
                response.skipped_records.len()
            )?;
            for record in &response.skipped_records {
                writeln!(output, "  - {}", record)?;
            }
        }

        writeln!(output)?;
        writeln!(output, "Result: {}", Self::outcome_line(&response.outcome))?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::RoundRecord;
    use crate::reconciliation::domain::ResolutionStrategy;
    use chrono::Utc;
    use std::path::PathBuf;

    fn response(outcome: Outcome) -> ReconcileResponse {
        let conflict = Conflict::new("golang.org/x/text", "v0.3.2", "v0.3.0");
        ReconcileResponse {
            core_path: PathBuf::from("/work/core"),
            plugin_path: PathBuf::from("/work/plugin"),
            generated_at: Utc::now(),
            outcome,
            initial_conflicts: vec![conflict.clone()],
            rounds: vec![RoundRecord {
                round: 1,
                strategy: ResolutionStrategy::RequireEdit,
                attempted: vec![conflict.clone()],
            }],
            remaining_conflicts: if outcome == Outcome::Unresolved {
                vec![conflict]
            } else {
                vec![]
            },
            skipped_records: vec![],
        }
    }

    #[test]
    fn test_format_resolved() {
        let output = TextFormatter::new()
            .format(&response(Outcome::Resolved { rounds: 1 }))
            .unwrap();

        assert!(output.contains("Core:   /work/core"));
        assert!(output.contains("Plugin: /work/plugin"));
        assert!(output.contains("Initial conflicts: 1"));
        assert!(output.contains("  - golang.org/x/text: core v0.3.2, plugin v0.3.0"));
        assert!(output.contains("Round 1 (require-edit): 1 fix(es) attempted"));
        assert!(output.contains("go mod edit -require=golang.org/x/text@v0.3.2"));
        assert!(!output.contains("Remaining conflicts"));
        assert!(output.ends_with("Result: all conflicts resolved after 1 round(s)\n"));
    }

    #[test]
    fn test_format_unresolved_lists_remaining() {
        let output = TextFormatter::new()
            .format(&response(Outcome::Unresolved))
            .unwrap();

        assert!(output.contains("Remaining conflicts: 1"));
        assert!(output.contains("Result: failed to resolve all conflicts"));
    }

    #[test]
    fn test_format_skipped_records() {
        let mut response = response(Outcome::NoConflicts);
        response.initial_conflicts.clear();
        response.rounds.clear();
        response.skipped_records = vec!["example.com/a v1.0.0 => ../a".to_string()];

        let output = TextFormatter::new().format(&response).unwrap();

        assert!(output.contains("Initial conflicts: 0"));
        assert!(output.contains("Skipped records without a version: 1"));
        assert!(output.contains("  - example.com/a v1.0.0 => ../a"));
        assert!(output.contains("Result: no conflicts to resolve"));
    }
}

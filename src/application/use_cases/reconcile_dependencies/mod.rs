use crate::application::dto::{Outcome, ReconcileRequest, ReconcileResponse, RoundRecord};
use crate::ports::outbound::{ModuleGraphTool, ProgressReporter};
use crate::reconciliation::domain::{Conflict, DependencyMapping, ResolutionStrategy};
use crate::reconciliation::services::{ConflictDetector, ModuleFilter, RecordParser};
use crate::shared::Result;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

/// ReconcileDependenciesUseCase - Forces a plugin onto its core's module versions
///
/// The workflow is a single loop over the requested strategies:
/// snapshot both projects, detect conflicts, and while conflicts remain
/// apply the next strategy to each of them and re-snapshot the plugin.
/// After the last strategy a final check reports whatever is left.
///
/// The core snapshot is taken once; only the plugin is ever edited.
///
/// # Type Parameters
/// * `T` - ModuleGraphTool implementation
/// * `PR` - ProgressReporter implementation
pub struct ReconcileDependenciesUseCase<T, PR> {
    tool: T,
    progress_reporter: PR,
}

/// Which check produced a batch of conflicts; selects the report wording
#[derive(Debug, Clone, Copy)]
enum Check {
    Initial,
    AfterRound,
    Final,
}

impl<T, PR> ReconcileDependenciesUseCase<T, PR>
where
    T: ModuleGraphTool,
    PR: ProgressReporter,
{
    /// Creates a new ReconcileDependenciesUseCase with injected dependencies
    pub fn new(tool: T, progress_reporter: PR) -> Self {
        Self {
            tool,
            progress_reporter,
        }
    }

    /// Executes the reconciliation use case
    ///
    /// # Errors
    /// Returns an error if a go command fails, if an exclusion pattern is
    /// invalid, or if a malformed record is met under the `error` policy.
    /// Edits already applied to the plugin are not rolled back.
    pub fn execute(&self, request: ReconcileRequest) -> Result<ReconcileResponse> {
        let parser = RecordParser::new(request.malformed_records);
        let filter = ModuleFilter::new(request.exclude_patterns.clone())?;
        let mut skipped_records = Vec::new();

        // Step 1: Snapshot both projects
        let core = self.snapshot(&parser, "core", &request.core_path, &mut skipped_records)?;
        let plugin =
            self.snapshot(&parser, "plugin", &request.plugin_path, &mut skipped_records)?;

        // Step 2: Detect conflicts
        let mut conflicts = self.detect(&filter, &core, &plugin);
        self.warn_unmatched_patterns(&filter);
        let initial_conflicts = conflicts.clone();

        let response = |outcome: Outcome,
                        rounds: Vec<RoundRecord>,
                        remaining: Vec<Conflict>,
                        skipped: Vec<String>| ReconcileResponse {
            core_path: request.core_path.clone(),
            plugin_path: request.plugin_path.clone(),
            generated_at: Utc::now(),
            outcome,
            initial_conflicts: initial_conflicts.clone(),
            rounds,
            remaining_conflicts: remaining,
            skipped_records: skipped,
        };

        if conflicts.is_empty() {
            self.progress_reporter
                .report_completion("✅ No conflicts to resolve");
            return Ok(response(Outcome::NoConflicts, vec![], vec![], skipped_records));
        }

        if request.dry_run {
            self.report_conflicts(&conflicts, Check::Initial);
            self.progress_reporter.report_completion(&format!(
                "🔍 Dry run: {} conflict(s) detected, no changes made",
                conflicts.len()
            ));
            return Ok(response(
                Outcome::ConflictsDetected,
                vec![],
                conflicts,
                skipped_records,
            ));
        }

        // Step 3: One fix round per strategy, re-checking the plugin after each
        let mut rounds = Vec::new();
        for (index, strategy) in request.strategies.iter().copied().enumerate() {
            let round = index + 1;
            let check = if round == 1 {
                Check::Initial
            } else {
                Check::AfterRound
            };
            info!(round, %strategy, conflicts = conflicts.len(), "starting resolution round");

            self.report_conflicts_and_fix(&conflicts, check, strategy, &request.plugin_path)?;
            rounds.push(RoundRecord {
                round,
                strategy,
                attempted: conflicts.clone(),
            });

            let plugin =
                self.snapshot(&parser, "plugin", &request.plugin_path, &mut skipped_records)?;
            conflicts = self.detect(&filter, &core, &plugin);

            if conflicts.is_empty() {
                self.progress_reporter
                    .report_completion("✅ All conflicts have been resolved");
                return Ok(response(
                    Outcome::Resolved { rounds: round },
                    rounds,
                    vec![],
                    skipped_records,
                ));
            }
        }

        // Step 4: Report what survived every round
        self.report_conflicts(&conflicts, Check::Final);
        self.progress_reporter.report_error(&format!(
            "❌ Failed to resolve all conflicts ({} remaining)",
            conflicts.len()
        ));

        Ok(response(
            Outcome::Unresolved,
            rounds,
            conflicts,
            skipped_records,
        ))
    }

    /// Runs the module listing in `project_dir` and parses it into a mapping
    ///
    /// Newly seen skipped records are appended to `skipped_records`.
    fn snapshot(
        &self,
        parser: &RecordParser,
        label: &str,
        project_dir: &Path,
        skipped_records: &mut Vec<String>,
    ) -> Result<DependencyMapping> {
        self.progress_reporter.report(&format!(
            "📖 Reading {} module graph from: {}",
            label,
            project_dir.display()
        ));

        let listing = self.tool.list_modules(project_dir)?;
        let parsed = parser.parse_listing(&listing)?;

        debug!(
            project = label,
            modules = parsed.mapping.len(),
            skipped = parsed.skipped.len(),
            "parsed module listing"
        );
        for record in parsed.skipped {
            // Re-snapshots of the plugin list the same records again
            if skipped_records.contains(&record) {
                continue;
            }
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipping {} record without a version: {}",
                label, record
            ));
            skipped_records.push(record);
        }

        Ok(parsed.mapping)
    }

    fn detect(
        &self,
        filter: &ModuleFilter,
        core: &DependencyMapping,
        plugin: &DependencyMapping,
    ) -> Vec<Conflict> {
        let conflicts = ConflictDetector::detect(core, plugin);
        if filter.is_empty() {
            return conflicts;
        }

        let total = conflicts.len();
        let kept = filter.filter_conflicts(conflicts);
        if kept.len() < total {
            self.progress_reporter.report(&format!(
                "🚫 Ignoring {} conflict(s) in excluded modules",
                total - kept.len()
            ));
        }
        kept
    }

    fn warn_unmatched_patterns(&self, filter: &ModuleFilter) {
        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any conflicting module.",
                pattern
            ));
        }
    }

    fn report_conflicts(&self, conflicts: &[Conflict], check: Check) {
        for conflict in conflicts {
            self.progress_reporter
                .report_conflict(&conflict_message(conflict, check));
        }
    }

    /// Reports each conflict, then applies `strategy` to it
    fn report_conflicts_and_fix(
        &self,
        conflicts: &[Conflict],
        check: Check,
        strategy: ResolutionStrategy,
        plugin_dir: &Path,
    ) -> Result<()> {
        for conflict in conflicts {
            self.progress_reporter
                .report_conflict(&conflict_message(conflict, check));
            self.progress_reporter.report(&format!(
                "🔧 Attempting fix by `{}`",
                strategy.command_line(&conflict.core_target())
            ));
            self.apply(strategy, plugin_dir, conflict)?;
        }
        Ok(())
    }

    fn apply(
        &self,
        strategy: ResolutionStrategy,
        plugin_dir: &Path,
        conflict: &Conflict,
    ) -> Result<()> {
        match strategy {
            ResolutionStrategy::RequireEdit => {
                self.tool
                    .require(plugin_dir, &conflict.module, &conflict.core_version)
            }
            ResolutionStrategy::FetchUpgrade => {
                self.tool
                    .upgrade(plugin_dir, &conflict.module, &conflict.core_version)
            }
        }
    }
}

fn conflict_message(conflict: &Conflict, check: Check) -> String {
    let status = match check {
        Check::Initial => "has a conflict",
        Check::AfterRound => "still has a conflict",
        Check::Final => "STILL has a conflict",
    };
    format!(
        "{} {}: core is using version {} but the plugin is using version {}",
        conflict.module, status, conflict.core_version, conflict.plugin_version
    )
}

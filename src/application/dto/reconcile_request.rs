use crate::reconciliation::domain::ResolutionStrategy;
use crate::reconciliation::services::MalformedRecordPolicy;
use crate::shared::error::ReconcileError;
use crate::shared::Result;
use std::path::PathBuf;

/// ReconcileRequest - Internal request DTO for the reconciliation use case
#[derive(Debug, Clone)]
pub struct ReconcileRequest {
    /// Root of the core Go module
    pub core_path: PathBuf,
    /// Root of the plugin Go module; the only project that gets edited
    pub plugin_path: PathBuf,
    /// Fix strategies, one round each, in order
    pub strategies: Vec<ResolutionStrategy>,
    /// Patterns for modules that must never be touched
    pub exclude_patterns: Vec<String>,
    /// Handling of records without a recognizable version
    pub malformed_records: MalformedRecordPolicy,
    /// Detect and report only
    pub dry_run: bool,
}

impl ReconcileRequest {
    pub fn builder() -> ReconcileRequestBuilder {
        ReconcileRequestBuilder::default()
    }
}

/// Builder for ReconcileRequest
#[derive(Debug, Default)]
pub struct ReconcileRequestBuilder {
    core_path: Option<PathBuf>,
    plugin_path: Option<PathBuf>,
    strategies: Option<Vec<ResolutionStrategy>>,
    exclude_patterns: Vec<String>,
    malformed_records: MalformedRecordPolicy,
    dry_run: bool,
}

impl ReconcileRequestBuilder {
    pub fn core_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.core_path = Some(path.into());
        self
    }

    pub fn plugin_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_path = Some(path.into());
        self
    }

    pub fn strategies(mut self, strategies: Vec<ResolutionStrategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn malformed_records(mut self, policy: MalformedRecordPolicy) -> Self {
        self.malformed_records = policy;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns a validation error if either path is missing or the strategy
    /// list was set to an empty list.
    pub fn build(self) -> Result<ReconcileRequest> {
        let missing = |field: &str| ReconcileError::Validation {
            message: format!("{} is required", field),
        };

        let core_path = self.core_path.ok_or_else(|| missing("core_path"))?;
        let plugin_path = self.plugin_path.ok_or_else(|| missing("plugin_path"))?;

        let strategies = self
            .strategies
            .unwrap_or_else(ResolutionStrategy::default_order);
        if strategies.is_empty() {
            return Err(ReconcileError::Validation {
                message: "At least one resolution strategy is required".to_string(),
            }
            .into());
        }

        Ok(ReconcileRequest {
            core_path,
            plugin_path,
            strategies,
            exclude_patterns: self.exclude_patterns,
            malformed_records: self.malformed_records,
            dry_run: self.dry_run,
        })
    }
}

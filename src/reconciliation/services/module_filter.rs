use crate::reconciliation::domain::Conflict;
use crate::shared::error::ReconcileError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ModuleFilter - Keeps excluded modules out of reconciliation
///
/// Supports wildcard patterns where `*` matches any run of characters,
/// e.g. `golang.org/x/*` or `*/internal/*`. Matching is case-sensitive.
#[derive(Debug, Default)]
pub struct ModuleFilter {
    patterns: Vec<ExcludePattern>,
}

impl ModuleFilter {
    /// Creates a new ModuleFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(ReconcileError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Drops conflicts whose module matches an exclusion pattern
    pub fn filter_conflicts(&self, conflicts: Vec<Conflict>) -> Vec<Conflict> {
        conflicts
            .into_iter()
            .filter(|conflict| !self.matches(&conflict.module))
            .collect()
    }

    /// Checks if a module identifier matches any exclusion pattern
    pub fn matches(&self, module: &str) -> bool {
        // every pattern is evaluated so matched flags stay accurate
        self.patterns
            .iter()
            .fold(false, |hit, pattern| pattern.matches(module) || hit)
    }

    /// Returns patterns that have not matched any module so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern split at its wildcards
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    parts: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let parts = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            parts,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, module: &str) -> bool {
        let is_match = glob_matches(&self.parts, module);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Matches `module` against pattern parts produced by splitting on `*`.
///
/// The first part is anchored at the start and the last part at the end;
/// the parts in between must appear in order.
fn glob_matches(parts: &[String], module: &str) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return false,
    };
    let Some(mut remaining) = module.strip_prefix(first.as_str()) else {
        return false;
    };

    let Some((last, middle)) = rest.split_last() else {
        // no wildcard: exact match
        return remaining.is_empty();
    };

    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    remaining.ends_with(last.as_str())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> Result<()> {
        Err(ReconcileError::Validation { message }.into())
    };

    if pattern.is_empty() {
        return invalid("Exclusion pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only module path characters and asterisks (*) are allowed.",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

/// Characters Go allows in module paths, plus the wildcard
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '~' | '+' | '*')
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a clean reconciliation apart from
/// one that left conflicts behind, and both apart from a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no conflicts, or every conflict was resolved
    Success = 0,
    /// Conflicts remain after the verification round (or were found in a dry run)
    ConflictsRemain = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid path, config error, go command failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConflictsRemain => write!(f, "Conflicts Remain (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency reconciliation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the root directory of a Go module")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Go executable not found: {binary}\n\n💡 Hint: Install Go or point --go-binary at the go executable")]
    GoBinaryNotFound { binary: String },

    #[error("Command `{command}` failed in {directory} (exit code {exit_code})\n{stderr}")]
    CommandFailed {
        command: String,
        directory: PathBuf,
        exit_code: i32,
        stderr: String,
    },

    #[error("Malformed dependency record: {record:?}\n\n💡 Hint: Expected `<module> <version>` or `<module> <version> => <module> <version>`")]
    MalformedRecord { record: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for user-supplied patterns and strategy lists
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ConflictsRemain.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ConflictsRemain),
            "Conflicts Remain (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = ReconcileError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Path is not syntactically valid".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid repository path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_command_failed_display() {
        let error = ReconcileError::CommandFailed {
            command: "go list -m all".to_string(),
            directory: PathBuf::from("/work/plugin"),
            exit_code: 1,
            stderr: "go: cannot find main module".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("go list -m all"));
        assert!(display.contains("/work/plugin"));
        assert!(display.contains("exit code 1"));
        assert!(display.contains("cannot find main module"));
    }

    #[test]
    fn test_malformed_record_display() {
        let error = ReconcileError::MalformedRecord {
            record: "example.com/a v1.0.0 => ../a".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed dependency record"));
        assert!(display.contains("../a"));
    }

    #[test]
    fn test_go_binary_not_found_display() {
        let error = ReconcileError::GoBinaryNotFound {
            binary: "go1.22".to_string(),
        };
        assert!(format!("{}", error).contains("go1.22"));
    }
}

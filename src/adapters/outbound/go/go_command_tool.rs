//! `go` CLI client for module graph queries and edits.

use crate::ports::outbound::ModuleGraphTool;
use crate::shared::error::ReconcileError;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Go executable, resolved through `PATH`
pub const DEFAULT_GO_BINARY: &str = "go";

/// GoCommandTool adapter that shells out to the Go toolchain
///
/// Every command runs with the project directory as the child's working
/// directory; the process-wide current directory is never changed.
#[derive(Debug, Clone)]
pub struct GoCommandTool {
    binary: String,
    show_spinner: bool,
}

impl GoCommandTool {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            show_spinner: false,
        }
    }

    /// Shows an indicatif spinner on stderr while a command runs
    pub fn with_spinner(mut self, show_spinner: bool) -> Self {
        self.show_spinner = show_spinner;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn spinner(&self, message: String) -> Option<ProgressBar> {
        if !self.show_spinner {
            return None;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .expect("Failed to set spinner template"),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }

    /// Runs `go <args>` in `project_dir` and returns its standard output
    fn run_go(&self, project_dir: &Path, args: &[&str]) -> Result<String> {
        let command_line = format!("go {}", args.join(" "));
        debug!(
            binary = %self.binary,
            dir = %project_dir.display(),
            cmd = %command_line,
            "running go command"
        );

        let spinner = self.spinner(command_line.clone());
        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let output = output.map_err(|e| -> anyhow::Error {
            if e.kind() == io::ErrorKind::NotFound && project_dir.is_dir() {
                ReconcileError::GoBinaryNotFound {
                    binary: self.binary.clone(),
                }
                .into()
            } else {
                anyhow::Error::new(e).context(format!(
                    "Failed to run `{}` in {}",
                    command_line,
                    project_dir.display()
                ))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);
            warn!(exit_code, %stderr, cmd = %command_line, "go command failed");
            return Err(ReconcileError::CommandFailed {
                command: command_line,
                directory: project_dir.to_path_buf(),
                exit_code,
                stderr,
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GoCommandTool {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BINARY)
    }
}

impl ModuleGraphTool for GoCommandTool {
    fn list_modules(&self, project_dir: &Path) -> Result<String> {
        self.run_go(project_dir, &["list", "-m", "all"])
    }

    fn require(&self, project_dir: &Path, module: &str, version: &str) -> Result<()> {
        let require = format!("-require={}@{}", module, version);
        self.run_go(project_dir, &["mod", "edit", &require])?;
        Ok(())
    }

    fn upgrade(&self, project_dir: &Path, module: &str, version: &str) -> Result<()> {
        let target = format!("{}@{}", module, version);
        self.run_go(project_dir, &["get", &target])?;
        Ok(())
    }
}

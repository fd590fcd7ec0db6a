mod cli;

use cli::Args;
use gomoderator::adapters::outbound::console::StderrProgressReporter;
use gomoderator::adapters::outbound::go::{GoCommandTool, DEFAULT_GO_BINARY};
use gomoderator::application::dto::ReconcileRequest;
use gomoderator::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use gomoderator::application::use_cases::ReconcileDependenciesUseCase;
use gomoderator::config::{self, ConfigFile};
use gomoderator::reconciliation::domain::ResolutionStrategy;
use gomoderator::reconciliation::services::MalformedRecordPolicy;
use gomoderator::shared::error::{ExitCode, ReconcileError};
use gomoderator::shared::path_validation::is_pathname_valid;
use gomoderator::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    validate_project_path(&args.core_repository_path)?;
    validate_project_path(&args.plugin_repository_path)?;

    let config = load_config(&args)?;

    // CLI flags win over config values; exclude lists are merged
    let go_binary = args
        .go_binary
        .clone()
        .or(config.go_binary)
        .unwrap_or_else(|| DEFAULT_GO_BINARY.to_string());
    let format = args.format.or(config.format).unwrap_or_default();
    let strategies = config
        .strategies
        .unwrap_or_else(ResolutionStrategy::default_order);
    let malformed_records = if args.strict {
        MalformedRecordPolicy::Error
    } else {
        config.malformed_records.unwrap_or_default()
    };
    let mut exclude_patterns = config.exclude_modules.unwrap_or_default();
    exclude_patterns.extend(args.exclude.iter().cloned());

    // Create adapters (Dependency Injection)
    let tool = GoCommandTool::new(go_binary).with_spinner(std::io::stderr().is_terminal());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ReconcileDependenciesUseCase::new(tool, progress_reporter);

    let request = ReconcileRequest::builder()
        .core_path(&args.core_repository_path)
        .plugin_path(&args.plugin_repository_path)
        .strategies(strategies)
        .exclude_patterns(exclude_patterns)
        .malformed_records(malformed_records)
        .dry_run(args.dry_run)
        .build()?;

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(response.exit_code())
}

/// Explicit `--config` must exist; otherwise look next to the plugin's go.mod
fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => match config::discover_config(&args.plugin_repository_path)? {
            Some(config) => {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    args.plugin_repository_path
                        .join(config::CONFIG_FILENAME)
                        .display()
                );
                Ok(config)
            }
            None => Ok(ConfigFile::default()),
        },
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !is_pathname_valid(path.as_os_str()) {
        return Err(ReconcileError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a valid path name on this platform".to_string(),
        }
        .into());
    }

    if !path.exists() {
        return Err(ReconcileError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ReconcileError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_empty() {
        let err = validate_project_path(Path::new("")).unwrap_err();
        assert!(err.to_string().contains("Not a valid path name"));
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("go.mod");
        fs::write(&file_path, "module example.com/plugin\n").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_load_config_discovers_in_plugin_directory() {
        let core = TempDir::new().unwrap();
        let plugin = TempDir::new().unwrap();
        fs::write(
            plugin.path().join(config::CONFIG_FILENAME),
            "go_binary: /opt/go/bin/go\n",
        )
        .unwrap();

        let args = Args {
            core_repository_path: core.path().to_path_buf(),
            plugin_repository_path: plugin.path().to_path_buf(),
            format: None,
            output: None,
            config: None,
            exclude: vec![],
            go_binary: None,
            dry_run: false,
            strict: false,
            verbose: false,
        };

        let config = load_config(&args).unwrap();
        assert_eq!(config.go_binary.as_deref(), Some("/opt/go/bin/go"));
    }
}

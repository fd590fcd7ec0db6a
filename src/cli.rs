use clap::Parser;
use gomoderator::application::dto::OutputFormat;
use std::path::PathBuf;

/// Align a Go plugin's module versions with those of its core project
#[derive(Parser, Debug)]
#[command(name = "gomoderator")]
#[command(version)]
#[command(
    about = "Align a Go plugin's module versions with those of its core project",
    long_about = None
)]
pub struct Args {
    /// Directory of the core Go project (read-only)
    #[arg(value_name = "CORE_REPOSITORY_PATH")]
    pub core_repository_path: PathBuf,

    /// Directory of the plugin Go project (modified in place)
    #[arg(value_name = "PLUGIN_REPOSITORY_PATH")]
    pub plugin_repository_path: PathBuf,

    /// Final report format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path for the final report (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to gomoderator.config.yml in the plugin directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Ignore conflicts in modules matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "golang.org/x/*" -e "example.com/tool"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Go executable to run [default: go]
    #[arg(long, env = "GOMODERATOR_GO", value_name = "PATH")]
    pub go_binary: Option<String>,

    /// Detect and report conflicts without modifying the plugin
    #[arg(long)]
    pub dry_run: bool,

    /// Treat dependency records without a version as fatal
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

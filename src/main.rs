//! QHelper - drop an archive, get the project open

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use qhelper::app;
use qhelper::config::{RunConfig, DEFAULT_FOLDER_NAME};
use qhelper::launcher::SystemOpener;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qhelper")]
#[command(version)]
#[command(about = "Extract a .zip or .rar next to itself and open the solution or project inside")]
struct Cli {
    /// Archive to extract (.zip or .rar)
    archive: Option<PathBuf>,

    /// Extra paths (ignored, only the first archive is processed)
    #[arg(hide = true)]
    extra: Vec<PathBuf>,

    /// Base name of the destination folder
    #[arg(long, env = "QHELPER_FOLDER_NAME", default_value = DEFAULT_FOLDER_NAME)]
    folder_name: String,

    /// List the solution/project files but do not open them
    #[arg(long)]
    no_open: bool,

    /// Program to open files with instead of the system default
    #[arg(long, env = "QHELPER_OPENER")]
    opener: Option<String>,

    /// Enable verbose logging (use RUST_LOG=debug for more detail)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Only initialize logging if verbose or RUST_LOG is set
    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive(if cli.verbose { "qhelper=debug".parse()? } else { "qhelper=warn".parse()? }),
            )
            .init();
    }

    println!("QHelper - Paul G.");

    if !cli.extra.is_empty() {
        warn!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    let config = RunConfig {
        archive_path: cli.archive,
        folder_name: cli.folder_name,
        open_files: !cli.no_open,
        opener: cli.opener,
    };
    let opener = SystemOpener::new(config.opener.clone());

    match app::run(&config, &opener) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            println!("{}", e.user_message());
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

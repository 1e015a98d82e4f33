use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use config::Config;
use textbuddy::{CommandEngine, LineStore, Session};

const MESSAGE_FILE_NAME_EMPTY: &str = "fatal error: file name cannot be empty";

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("textbuddy")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("textbuddy.log");

    // Setup env_logger with file output; stdout belongs to the session
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(file: &Path, config: &Config) -> Result<()> {
    info!("Starting session on {}", file.display());

    let store = LineStore::open(file).context(format!("Failed to open storage file {}", file.display()))?;
    let engine = CommandEngine::with_options(store, config.engine_options());
    let session = Session::new(&engine).with_prompt(config.session.prompt.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    session.welcome(&file.display().to_string(), &mut stdout)?;
    let executed = session.run(stdin.lock(), &mut stdout)?;

    info!("Session ended after {} commands", executed);
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let Some(file) = cli.file.as_ref() else {
        eprintln!("{}", MESSAGE_FILE_NAME_EMPTY.red());
        std::process::exit(1);
    };

    // Setup logging before anything touches the storage file
    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    if let Some(level) = config.max_log_level(cli.is_verbose(), env::var_os("RUST_LOG").is_some()) {
        log::set_max_level(level);
    }

    // Run the main application logic
    run_application(file, &config).context("Application failed")?;

    Ok(())
}

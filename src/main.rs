use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use perch::core::config;
use perch::core::fs::DirectorySnapshot;
use perch::core::state::App;
use perch::tui;

#[derive(Parser)]
#[command(
    name = "perch",
    about = "Interactive terminal file browser",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")")
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    init_logging();
    info!("Perch starting up");

    let resolved = match config::load_config() {
        Ok(cfg) => config::resolve(&cfg),
        Err(e) => {
            warn!("Config error: {e}, falling back to defaults");
            config::resolve(&config::PerchConfig::default())
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("perch: cannot determine working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the initial snapshot before touching the terminal, so a fatal
    // failure here never leaves the terminal in raw mode.
    let snapshot = match DirectorySnapshot::load(&cwd) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("perch: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = App::from_config(cwd, snapshot, &resolved);
    match tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("perch: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize the file logger at `~/.perch/perch.log`.
///
/// The log lives outside the browsed tree so perch never lists its own
/// log file. Logging is best-effort; failure to set it up is not fatal.
fn init_logging() {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

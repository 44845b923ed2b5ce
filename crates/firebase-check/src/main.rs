//! firebase-check entry point.
//!
//! # Usage
//!
//! ```text
//! firebase-check [OPTIONS]
//!
//! Options:
//!   --base-dir <DIR>   Project directory to check [default: executable's directory]
//!   --config <FILE>    Settings file [default: <base-dir>/firebase-check.toml if present]
//!   --strict           Exit with status 1 when a configuration file is missing
//! ```
//!
//! With no arguments the report goes to stdout and the exit status is 0
//! whatever the outcome.  Diagnostics go to stderr via `tracing`; set
//! `RUST_LOG=debug` to see them.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use firebase_check::infrastructure::base_dir::executable_dir;
use firebase_check::infrastructure::filesystem::LocalFileSystem;
use firebase_check::infrastructure::storage::settings::{
    default_settings_path, load_required_settings, load_settings,
};
use firebase_check::{ConfigChecker, Settings};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Checks that the Firebase configuration files of a Flutter project exist.
#[derive(Debug, Parser)]
#[command(name = "firebase-check", version)]
struct Cli {
    /// Directory containing the `android/` and `ios/` folders.
    ///
    /// Defaults to the directory holding this executable.
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// TOML settings file with the project name and iOS bundle ID used in
    /// the instructions.  Unlike the implicit file, this one must load.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exit with a non-zero status when either file is missing.
    #[arg(long)]
    strict: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    // Report text owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        base_dir,
        config,
        strict,
    } = Cli::parse();

    let base_dir = base_dir.unwrap_or_else(resolve_executable_dir);
    info!("checking Firebase configuration under {}", base_dir.display());

    let settings = match config {
        Some(path) => load_required_settings(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => implicit_settings(&base_dir),
    };

    let checker = ConfigChecker::new(base_dir, settings, LocalFileSystem);
    let all_present = checker.check();

    if strict && !all_present {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Executable directory, or the working directory if the OS cannot tell us.
fn resolve_executable_dir() -> PathBuf {
    match executable_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!("{e}; falling back to the current directory");
            PathBuf::from(".")
        }
    }
}

/// Settings from `<base>/firebase-check.toml`; defaults if it is absent or broken.
fn implicit_settings(base_dir: &Path) -> Settings {
    let path = default_settings_path(base_dir);
    load_settings(&path).unwrap_or_else(|e| {
        warn!("ignoring {}: {e}", path.display());
        Settings::default()
    })
}

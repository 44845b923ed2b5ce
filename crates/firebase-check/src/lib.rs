//! # firebase-check
//!
//! Diagnostic tool that verifies the Firebase configuration files of a
//! Flutter project are present before a build:
//!
//! - `android/app/google-services.json` (parsed for its project ID)
//! - `ios/Runner/GoogleService-Info.plist` (existence only)
//!
//! The binary in `main.rs` and the integration tests in `tests/` share this
//! module tree.
//!
//! - **`domain`** – Pure types: the two check targets, per-file results,
//!   project ID extraction, and the settings schema.  No file system access.
//! - **`application`** – The [`ConfigChecker`] use case and report rendering.
//! - **`infrastructure`** – File system probe, executable directory lookup,
//!   and the optional TOML settings file.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::check_config::ConfigChecker;
pub use application::render_report::render_report;
pub use domain::check::{CheckReport, ConfigFileCheck, ConfigTarget};
pub use domain::project_id::{extract_project_id, CheckError, UNKNOWN_PROJECT_ID};
pub use domain::settings::{ProjectSettings, Settings};

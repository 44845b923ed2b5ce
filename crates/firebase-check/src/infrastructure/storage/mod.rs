//! Storage infrastructure: the optional settings file.
//!
//! The `settings` sub-module reads `firebase-check.toml` into
//! [`Settings`](crate::domain::settings::Settings), falling back to defaults
//! when the file does not exist.

pub mod settings;

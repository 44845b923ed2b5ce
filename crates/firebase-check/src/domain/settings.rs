//! Project-specific text used in the "how to add it" instructions.
//!
//! Loaded from an optional `firebase-check.toml` by
//! `infrastructure::storage::settings`.  Every field has a serde default so
//! the file may set any subset of them:
//!
//! ```toml
//! [project]
//! name = "TasteSmoke"
//! ios_bundle_id = "com.example.tastesmoke_flutter"
//! console_url = "https://console.firebase.google.com"
//! ```

use serde::Deserialize;

/// Top-level settings file schema.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub project: ProjectSettings,
}

/// Identity of the Firebase project the app belongs to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Project name as shown in the Firebase console.
    #[serde(default = "default_project_name")]
    pub name: String,
    /// Bundle ID to register for the iOS app.
    #[serde(default = "default_ios_bundle_id")]
    pub ios_bundle_id: String,
    #[serde(default = "default_console_url")]
    pub console_url: String,
}

fn default_project_name() -> String {
    "TasteSmoke".to_string()
}
fn default_ios_bundle_id() -> String {
    "com.example.tastesmoke_flutter".to_string()
}
fn default_console_url() -> String {
    "https://console.firebase.google.com".to_string()
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            ios_bundle_id: default_ios_bundle_id(),
            console_url: default_console_url(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

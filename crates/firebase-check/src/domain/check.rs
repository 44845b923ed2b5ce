//! Check targets and per-file results.
//!
//! A run inspects exactly two files, one per [`ConfigTarget`].  Each
//! inspection produces a [`ConfigFileCheck`]; the pair is a [`CheckReport`].
//!
//! # Existence is probed once
//!
//! `ConfigFileCheck::exists` is filled in by a single file system probe when
//! the check is built.  Rendering and the overall result read the stored
//! flag, so the report stays internally consistent even if the tree changes
//! while the tool runs.

use std::path::{Path, PathBuf};

/// One of the two Firebase configuration files a Flutter project needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTarget {
    /// `android/app/google-services.json`, parsed for the project ID.
    Android,
    /// `ios/Runner/GoogleService-Info.plist`, existence only.
    Ios,
}

impl ConfigTarget {
    /// Both targets in report order.
    pub const ALL: [ConfigTarget; 2] = [ConfigTarget::Android, ConfigTarget::Ios];

    /// Path components relative to the project base directory.
    pub fn relative_components(self) -> &'static [&'static str] {
        match self {
            ConfigTarget::Android => &["android", "app", "google-services.json"],
            ConfigTarget::Ios => &["ios", "Runner", "GoogleService-Info.plist"],
        }
    }

    /// Bare file name, used in status lines.
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigTarget::Android => "google-services.json",
            ConfigTarget::Ios => "GoogleService-Info.plist",
        }
    }

    /// Section heading printed above the status line.
    pub fn heading(self) -> &'static str {
        match self {
            ConfigTarget::Android => "📱 Android Configuration:",
            ConfigTarget::Ios => "🍎 iOS Configuration:",
        }
    }

    /// Whether the file content is parsed for the project ID.
    pub fn is_parsed(self) -> bool {
        matches!(self, ConfigTarget::Android)
    }

    /// Joins the relative components onto `base`.
    pub fn resolve(self, base: &Path) -> PathBuf {
        self.relative_components()
            .iter()
            .fold(base.to_path_buf(), |path, part| path.join(part))
    }

    /// Relative path with `/` separators, as shown in user instructions.
    pub fn display_relative(self) -> String {
        self.relative_components().join("/")
    }
}

/// Result of inspecting one configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileCheck {
    pub target: ConfigTarget,
    /// Fully resolved path that was probed.
    pub path: PathBuf,
    pub exists: bool,
    /// Project ID, set only when the file existed and parsed.
    pub parsed_field: Option<String>,
    /// Description of the read/parse failure, if one occurred.
    pub parse_error: Option<String>,
}

impl ConfigFileCheck {
    /// A check for a file that was not found.
    pub fn missing(target: ConfigTarget, path: PathBuf) -> Self {
        Self {
            target,
            path,
            exists: false,
            parsed_field: None,
            parse_error: None,
        }
    }

    /// A check for a file that was found; the parse step fills in the rest.
    pub fn found(target: ConfigTarget, path: PathBuf) -> Self {
        Self {
            exists: true,
            ..Self::missing(target, path)
        }
    }

    pub fn with_parsed_field(mut self, value: String) -> Self {
        self.parsed_field = Some(value);
        self
    }

    pub fn with_parse_error(mut self, message: String) -> Self {
        self.parse_error = Some(message);
        self
    }
}

/// Outcome of a full run: one check per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub android: ConfigFileCheck,
    pub ios: ConfigFileCheck,
}

impl CheckReport {
    /// `true` iff both files exist.  Parse failures do not affect this.
    pub fn all_present(&self) -> bool {
        self.android.exists && self.ios.exists
    }

    /// The two checks in report order.
    pub fn checks(&self) -> [&ConfigFileCheck; 2] {
        [&self.android, &self.ios]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

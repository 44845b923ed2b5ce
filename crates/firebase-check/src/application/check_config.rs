//! ConfigChecker: probes both Firebase files and reports on them.
//!
//! # Flow
//!
//! ```text
//! check()
//!  └─ inspect()                 -- one existence probe per target
//!       ├─ Android: read + extract_project_id (failure → parse_error)
//!       └─ iOS:     existence only
//!  └─ render_report()           -- text to the output sink
//!  └─ report.all_present()      -- the boolean result
//! ```
//!
//! Nothing in this flow returns an error to the caller.  Missing files and
//! parse failures become part of the report; a failing output sink is logged
//! and otherwise ignored.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::render_report::render_report;
use crate::domain::check::{CheckReport, ConfigFileCheck, ConfigTarget};
use crate::domain::project_id::{extract_project_id, CheckError};
use crate::domain::settings::Settings;

/// Read-only view of the file system needed by the checker.
///
/// The production implementation is
/// [`LocalFileSystem`](crate::infrastructure::filesystem::LocalFileSystem);
/// tests supply an in-memory map.
pub trait FileProbe {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Reads the whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The check use case, bound to one base directory.
pub struct ConfigChecker<P: FileProbe> {
    base_dir: PathBuf,
    settings: Settings,
    probe: P,
}

impl<P: FileProbe> ConfigChecker<P> {
    pub fn new(base_dir: impl Into<PathBuf>, settings: Settings, probe: P) -> Self {
        Self {
            base_dir: base_dir.into(),
            settings,
            probe,
        }
    }

    /// Probes both targets and parses the Android file, without printing.
    pub fn inspect(&self) -> CheckReport {
        CheckReport {
            android: self.inspect_target(ConfigTarget::Android),
            ios: self.inspect_target(ConfigTarget::Ios),
        }
    }

    /// Runs the check and writes the report to stdout.
    ///
    /// Returns `true` iff both configuration files exist.
    pub fn check(&self) -> bool {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.check_to(&mut out)
    }

    /// Runs the check and writes the report to `out`.
    ///
    /// Returns `true` iff both configuration files exist.  A write failure is
    /// logged and does not change the result.
    pub fn check_to<W: Write>(&self, out: &mut W) -> bool {
        let report = self.inspect();

        if let Err(e) = render_report(&report, &self.settings, out).and_then(|()| out.flush()) {
            warn!("failed to write report: {e}");
        }

        let ok = report.all_present();
        debug!(base_dir = %self.base_dir.display(), ok, "check finished");
        ok
    }

    fn inspect_target(&self, target: ConfigTarget) -> ConfigFileCheck {
        let path = target.resolve(&self.base_dir);

        if !self.probe.exists(&path) {
            debug!(path = %path.display(), "{} not found", target.file_name());
            return ConfigFileCheck::missing(target, path);
        }

        let check = ConfigFileCheck::found(target, path);
        if !target.is_parsed() {
            return check;
        }

        match self.read_project_id(&check.path) {
            Ok(id) => {
                debug!(project_id = %id, "read project ID");
                check.with_parsed_field(id)
            }
            Err(e) => {
                warn!(path = %check.path.display(), "could not read project ID: {e}");
                check.with_parse_error(e.to_string())
            }
        }
    }

    fn read_project_id(&self, path: &Path) -> Result<String, CheckError> {
        let text = self
            .probe
            .read_to_string(path)
            .map_err(|source| CheckError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        extract_project_id(&text)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

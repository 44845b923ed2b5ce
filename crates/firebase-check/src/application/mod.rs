//! Application layer: the check use case and its console report.
//!
//! - **`check_config`** – [`ConfigChecker`](check_config::ConfigChecker)
//!   probes both targets, parses the Android file, and produces a
//!   [`CheckReport`](crate::domain::check::CheckReport).  File system access
//!   goes through the [`FileProbe`](check_config::FileProbe) trait so the use
//!   case can be tested without touching disk.
//!
//! - **`render_report`** – Turns a report into the human-readable text
//!   written to stdout.
//!
//! **Dependency rule**: this layer depends on `domain` only.  Concrete
//! adapters live in `infrastructure`.

pub mod check_config;
pub mod render_report;

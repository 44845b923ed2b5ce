//! Locates the directory the check paths are resolved against.
//!
//! By default this is the directory holding the running executable, so a
//! copy of the binary dropped into a Flutter project root checks that
//! project regardless of the shell's working directory.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for base directory resolution.
#[derive(Debug, Error)]
pub enum BaseDirError {
    /// The OS could not report the executable path.
    #[error("could not determine executable path: {0}")]
    Io(#[from] std::io::Error),

    /// The executable path has no parent component.
    #[error("executable path {0} has no parent directory")]
    NoParent(PathBuf),
}

/// Returns the directory containing the running executable.
///
/// # Errors
///
/// Returns [`BaseDirError::Io`] if `std::env::current_exe` fails and
/// [`BaseDirError::NoParent`] if the path it returns has no parent.
pub fn executable_dir() -> Result<PathBuf, BaseDirError> {
    let exe = std::env::current_exe()?;
    parent_dir(exe)
}

fn parent_dir(exe: PathBuf) -> Result<PathBuf, BaseDirError> {
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(BaseDirError::NoParent(exe)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

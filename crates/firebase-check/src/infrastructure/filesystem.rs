//! [`FileProbe`] backed by `std::fs`.

use std::io;
use std::path::Path;

use crate::application::check_config::FileProbe;

/// Reads the local file system.  Holds no state; every call goes to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileProbe for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // Follows symlinks; a dangling link or an unreadable parent counts as absent.
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

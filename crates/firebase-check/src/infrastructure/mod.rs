//! Infrastructure layer: OS-facing adapters.
//!
//! - **`filesystem`** – [`LocalFileSystem`](filesystem::LocalFileSystem), the
//!   real [`FileProbe`](crate::application::check_config::FileProbe).
//! - **`base_dir`** – Locates the directory containing the running executable.
//! - **`storage`** – Optional TOML settings file.
//!
//! **Dependency rule**: this layer may depend on `application` and `domain`,
//! but MUST NOT be imported by them.

pub mod base_dir;
pub mod filesystem;
pub mod storage;

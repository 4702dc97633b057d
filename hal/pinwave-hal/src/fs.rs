//! Filesystem capability
//!
//! The pin state machine never touches the OS directly; every durable
//! read or write goes through this trait. Implementations are plain
//! pass-throughs: no caching, no retries, each call maps to one OS
//! operation (or one fake-store lookup in tests).

use std::io;
use std::path::Path;

/// Pass-through access to a (pseudo-)filesystem.
///
/// Failures surface as [`std::io::Error`] so callers see the original
/// OS error unmodified.
pub trait Fs {
    /// Check whether `path` denotes an existing node.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full text contents of `path`.
    ///
    /// Fails if the path is missing or unreadable.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Overwrite `path` with `contents`.
    ///
    /// Fails if the path is unwritable. Write-only control files such
    /// as the sysfs export node accept the value without becoming
    /// readable afterwards.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

//! `std::fs` pass-through

use std::fs;
use std::io;
use std::path::Path;

use log::trace;
use pinwave_hal::Fs;

/// Direct `std::fs` access: no caching, no retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysFs;

impl Fs for SysFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        trace!("read {}", path.display());
        fs::read_to_string(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        trace!("write {} <- {:?}", path.display(), contents);
        fs::write(path, contents)
    }
}

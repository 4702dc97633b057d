//! Linux implementations of the Pinwave capability traits
//!
//! [`SysFs`] maps the [`pinwave_hal::Fs`] trait onto `std::fs`, one OS
//! call per trait call; [`ThreadDelay`] maps [`pinwave_hal::Delay`]
//! onto `std::thread::sleep`. [`open`] wires both into a ready-to-use
//! pin.
//!
//! Running against the real `/sys/class/gpio` tree typically needs
//! membership in the `gpio` group or root; permission errors surface
//! as [`pinwave_core::PinError::Io`].

#![deny(unsafe_code)]

pub mod delay;
pub mod fs;

pub use delay::ThreadDelay;
pub use fs::SysFs;

use pinwave_core::Pin;

/// Open pin `id` against the real sysfs tree with thread-based pacing.
///
/// Performs no I/O; the pin is exported lazily on first use.
pub fn open(id: u64) -> Pin<SysFs, ThreadDelay> {
    Pin::new(id, SysFs, ThreadDelay)
}

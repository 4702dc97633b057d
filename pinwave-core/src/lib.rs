//! Sysfs GPIO pin state machine
//!
//! This crate contains the stateful core that turns a pin number into
//! sysfs control-file traffic:
//!
//! - Tri-state caching of exported/direction/level so repeated reads
//!   cost no filesystem I/O
//! - Lazy provisioning: the pin is exported on first real use, never
//!   at construction time
//! - Direction and level accessors with the sysfs `"in"`/`"out"` and
//!   active-low `"1"`/`"0"` vocabularies
//! - Timed toggling for software square waves (buzzers, blinkers)
//!
//! All filesystem access goes through the [`pinwave_hal::Fs`] trait;
//! pacing goes through [`pinwave_hal::Delay`]. The crate performs no
//! OS calls of its own.

#![deny(unsafe_code)]

pub mod error;
pub mod pin;
pub mod types;

pub use error::PinError;
pub use pin::Pin;
pub use types::{Cached, IoMode, Power};

//! Single-pin state machine over the sysfs GPIO tree
//!
//! A [`Pin`] reconciles the slow, side-effecting sysfs files with an
//! in-memory cache. Provisioning (the export write) is lazy: it
//! happens once, at the first direction or level operation on a pin
//! that is not yet exported, never at construction time.
//!
//! Caching rules:
//! - Each of exported/direction/level starts [`Cached::Unknown`] and is
//!   resolved at most once per instance by a filesystem read; a write
//!   through this instance also resolves the slot.
//! - A resolved slot answers reads with zero filesystem I/O until it is
//!   overwritten.
//!
//! Ordering rules:
//! - Every direction/level operation first runs the ensure-enabled
//!   guard ([`Pin::enable`]).
//! - A level write on a pin whose resolved direction is not
//!   [`IoMode::Write`] first writes `"out"` to the direction file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use pinwave_hal::{Delay, Fs};

use crate::error::PinError;
use crate::types::{Cached, IoMode, Power};

/// Root of the kernel's GPIO sysfs tree.
pub const GPIO_ROOT: &str = "/sys/class/gpio";

/// Write-only provisioning node; takes a decimal pin id.
pub const EXPORT_PATH: &str = "/sys/class/gpio/export";

/// Number of full on/off cycles needed to cover `duration` flipping
/// every `period`, rounded up so the wave always spans the whole
/// duration. A sub-nanosecond period is clamped to 1 ns so the count
/// stays finite and deterministic at extreme frequencies.
fn cycles_for(period: Duration, duration: Duration) -> u64 {
    let period = period.as_nanos().max(1);
    let cycles = duration.as_nanos().div_ceil(period);
    u64::try_from(cycles).unwrap_or(u64::MAX)
}

/// One GPIO pin addressed through the sysfs pseudo-filesystem.
///
/// Owns its pin id's control paths exclusively; no locking is done, so
/// two instances over the same id are a caller error.
pub struct Pin<F, D> {
    id: u64,
    fs: F,
    delay: D,
    root: PathBuf,
    direction_path: PathBuf,
    value_path: PathBuf,
    enabled: Cached<bool>,
    io_mode: Cached<IoMode>,
    power: Cached<Power>,
}

impl<F: Fs, D: Delay> Pin<F, D> {
    /// Create a pin interface over `id`.
    ///
    /// Performs no filesystem I/O: paths are derived eagerly, state is
    /// resolved lazily on first access.
    pub fn new(id: u64, fs: F, delay: D) -> Self {
        let root = PathBuf::from(format!("{GPIO_ROOT}/gpio{id}"));
        let direction_path = root.join("direction");
        let value_path = root.join("value");
        Self {
            id,
            fs,
            delay,
            root,
            direction_path,
            value_path,
            enabled: Cached::Unknown,
            io_mode: Cached::Unknown,
            power: Cached::Unknown,
        }
    }

    /// The pin id this instance addresses.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the pin is exported.
    ///
    /// Resolved by an existence check on the pin root directory the
    /// first time; cached afterwards.
    pub fn is_enabled(&mut self) -> bool {
        if let Some(enabled) = self.enabled.known() {
            return enabled;
        }
        let enabled = self.fs.exists(&self.root);
        self.enabled = Cached::Known(enabled);
        enabled
    }

    /// Mark the pin enabled or disabled in cache only.
    ///
    /// No filesystem I/O happens here: marking a pin enabled defers the
    /// export write to the first real direction/level operation, and
    /// marking it disabled never unexports.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = Cached::Known(enabled);
    }

    /// Export the pin if it is not already exported.
    ///
    /// Writes the decimal pin id to the export node, then records the
    /// pin as enabled. A no-op when the pin is already enabled. This is
    /// the ensure-enabled guard every direction/level operation runs
    /// first.
    pub fn enable(&mut self) -> Result<(), PinError> {
        if !self.is_enabled() {
            debug!("exporting gpio{}", self.id);
            self.fs.write(Path::new(EXPORT_PATH), &self.id.to_string())?;
            self.enabled = Cached::Known(true);
        }
        Ok(())
    }

    /// Mark the pin disabled.
    ///
    /// Cache-only: the pin stays exported in sysfs. The asymmetry with
    /// [`Pin::enable`] is deliberate; a later operation re-runs the
    /// export write.
    pub fn disable(&mut self) {
        self.enabled = Cached::Known(false);
    }

    /// Current direction, reading the direction file on first access.
    pub fn io_mode(&mut self) -> Result<IoMode, PinError> {
        self.enable()?;
        match self.io_mode {
            Cached::Known(mode) => Ok(mode),
            Cached::Unknown => {
                let raw = self.fs.read(&self.direction_path)?;
                let mode = IoMode::from_sysfs(raw.trim()).ok_or_else(|| {
                    PinError::UnexpectedContents {
                        path: self.direction_path.clone(),
                        contents: raw,
                    }
                })?;
                self.io_mode = Cached::Known(mode);
                Ok(mode)
            }
        }
    }

    /// Set the direction, writing `"in"`/`"out"` to the direction file.
    pub fn set_io_mode(&mut self, mode: IoMode) -> Result<(), PinError> {
        self.enable()?;
        debug!("gpio{}: direction -> {}", self.id, mode.as_sysfs());
        self.fs.write(&self.direction_path, mode.as_sysfs())?;
        self.io_mode = Cached::Known(mode);
        Ok(())
    }

    /// Current logical level, reading the value file on first access.
    ///
    /// Decoding is active-low: raw `"1"` is [`Power::Off`], raw `"0"`
    /// is [`Power::On`].
    pub fn power(&mut self) -> Result<Power, PinError> {
        self.enable()?;
        match self.power {
            Cached::Known(power) => Ok(power),
            Cached::Unknown => {
                let raw = self.fs.read(&self.value_path)?;
                let power = Power::from_sysfs(raw.trim()).ok_or_else(|| {
                    PinError::UnexpectedContents {
                        path: self.value_path.clone(),
                        contents: raw,
                    }
                })?;
                self.power = Cached::Known(power);
                Ok(power)
            }
        }
    }

    /// Set the logical level.
    ///
    /// If the resolved direction is not [`IoMode::Write`] the pin is
    /// switched to output first (one direction write), then the value
    /// file gets the active-low encoding of `power`.
    pub fn set_power(&mut self, power: Power) -> Result<(), PinError> {
        if self.io_mode()? != IoMode::Write {
            self.set_io_mode(IoMode::Write)?;
        }
        self.fs.write(&self.value_path, power.as_sysfs())?;
        self.power = Cached::Known(power);
        Ok(())
    }

    /// Drive the pin to its active level.
    pub fn turn_on(&mut self) -> Result<(), PinError> {
        self.set_power(Power::On)
    }

    /// Drive the pin to its inactive level.
    pub fn turn_off(&mut self) -> Result<(), PinError> {
        self.set_power(Power::Off)
    }

    /// Flip the level: one value write, after resolving the current
    /// level if it is still unknown.
    pub fn toggle(&mut self) -> Result<(), PinError> {
        let next = self.power()?.toggled();
        self.set_power(next)
    }

    /// Run exactly `cycles` full on/off cycles.
    ///
    /// Each cycle is two [`Pin::toggle`] calls, each followed by a
    /// blocking sleep of `period`, so the square wave's frequency is
    /// `1 / (2 * period)`. Blocks until all cycles complete; there is
    /// no cancellation.
    pub fn toggle_cycles(&mut self, period: Duration, cycles: u64) -> Result<(), PinError> {
        for _ in 0..cycles {
            self.toggle()?;
            self.delay.sleep(period);
            self.toggle()?;
            self.delay.sleep(period);
        }
        Ok(())
    }

    /// Toggle for (at least) `duration`, flipping every `period`.
    ///
    /// The cycle count is `duration / period` rounded up, so the wave
    /// always covers the full duration; see [`Pin::toggle_cycles`] for
    /// the per-cycle behavior.
    pub fn toggle_for(&mut self, period: Duration, duration: Duration) -> Result<(), PinError> {
        let cycles = cycles_for(period, duration);
        self.toggle_cycles(period, cycles)
    }
}

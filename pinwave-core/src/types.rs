//! Vocabulary types for pin state
//!
//! The sysfs encodings are fixed by the kernel interface: direction
//! files hold `"in"`/`"out"`, value files hold `"1"`/`"0"` with
//! active-low polarity (raw `1` is the inactive level).

/// Pin direction: sensing input or driving output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoMode {
    /// Input (`"in"` in the direction file)
    Read,
    /// Output (`"out"` in the direction file)
    Write,
}

impl IoMode {
    /// The text this mode is written as to a direction file.
    pub fn as_sysfs(self) -> &'static str {
        match self {
            IoMode::Read => "in",
            IoMode::Write => "out",
        }
    }

    /// Decode direction-file text; `None` for anything unrecognised.
    pub fn from_sysfs(raw: &str) -> Option<Self> {
        match raw {
            "in" => Some(IoMode::Read),
            "out" => Some(IoMode::Write),
            _ => None,
        }
    }
}

/// Logical pin level, independent of the raw file encoding.
///
/// The wiring convention is active-low: raw `"0"` means [`Power::On`],
/// raw `"1"` means [`Power::Off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    /// Active level
    On,
    /// Inactive level
    Off,
}

impl Power {
    /// Get the opposite level.
    pub fn toggled(self) -> Self {
        match self {
            Power::On => Power::Off,
            Power::Off => Power::On,
        }
    }

    /// The text this level is written as to a value file.
    pub fn as_sysfs(self) -> &'static str {
        match self {
            Power::On => "0",
            Power::Off => "1",
        }
    }

    /// Decode value-file text; `None` for anything unrecognised.
    pub fn from_sysfs(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(Power::On),
            "1" => Some(Power::Off),
            _ => None,
        }
    }
}

/// Tri-state cache slot for one pin attribute.
///
/// `Unknown` means the attribute has never been read or written through
/// this instance, so the next read must consult the filesystem. A
/// `Known` slot is authoritative until overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cached<T> {
    /// Not yet queried; next read performs filesystem I/O.
    Unknown,
    /// Resolved by a previous read or write.
    Known(T),
}

impl<T: Copy> Cached<T> {
    /// The cached value, if resolved.
    pub fn known(self) -> Option<T> {
        match self {
            Cached::Unknown => None,
            Cached::Known(value) => Some(value),
        }
    }
}

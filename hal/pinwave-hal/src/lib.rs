//! Pinwave capability traits
//!
//! This crate defines the capability traits the pin state machine is
//! written against, so the core logic can be exercised on any host with
//! in-memory fakes and deployed against the real sysfs tree unchanged.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (buzzer driver, blinker)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinwave-core (pin state machine)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinwave-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinwave-hal-linux (std::fs, thread)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`fs::Fs`] - Pass-through filesystem access (exists/read/write)
//! - [`delay::Delay`] - Blocking pacing for timed toggling

#![deny(unsafe_code)]

pub mod delay;
pub mod fs;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use fs::Fs;

//! Blocking delay capability
//!
//! Timed toggling paces its level flips by sleeping between writes.
//! Abstracting the sleep keeps the pacing contract testable: test
//! doubles record the requested durations instead of blocking.

use std::time::Duration;

/// Blocking pacing primitive.
pub trait Delay {
    /// Block the calling thread for `duration`.
    ///
    /// Implementations may overshoot (OS scheduling) but must not
    /// return early.
    fn sleep(&mut self, duration: Duration);
}

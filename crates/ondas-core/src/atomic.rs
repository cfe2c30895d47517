//! Lock-free scalar cells shared across the timer boundary.
//!
//! The timer interrupt and the main loop share single scalars (amplitudes,
//! pans, modulation depths, the base frequency). Each is stored as an
//! [`AtomicF32`]: an `AtomicU32` holding the IEEE-754 bit pattern, accessed
//! with relaxed ordering. A torn read is impossible and neither context
//! ever spins or blocks on the other.

use core::sync::atomic::{AtomicU32, Ordering};

/// An `f32` with atomic load/store semantics.
///
/// Backed by an [`AtomicU32`] via `to_bits`/`from_bits`. All accesses use
/// [`Ordering::Relaxed`]: the fields guarded this way are independent
/// scalars, and cross-field consistency is provided by the critical
/// sections around composite writes, not by ordering here.
///
/// # Example
///
/// ```rust
/// use ondas_core::AtomicF32;
///
/// let cell = AtomicF32::new(0.5);
/// cell.store(0.75);
/// assert_eq!(cell.load(), 0.75);
/// ```
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    /// Creates a cell holding `value`.
    pub const fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    /// Loads the current value (relaxed).
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Stores a new value (relaxed).
    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

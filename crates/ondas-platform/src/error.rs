//! Error type for adapter bring-up.
//!
//! The running core has no recoverable error taxonomy: every per-tick
//! input is clamped at the boundary and the adapters are assumed live.
//! What *can* fail is bring-up — an I²C DAC that does not acknowledge, a
//! panel the driver cannot support — and adapters report that to the boot
//! routine with this type.

use thiserror::Error;

/// Failure reported by an adapter during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// A DAC channel did not come up (0 = left, 1 = right, 2 = stereo,
    /// 3..=9 = per-partial outputs).
    #[error("DAC channel {0} failed to initialize")]
    DacInit(usize),

    /// An ADC input did not come up.
    #[error("ADC channel {0} failed to initialize")]
    AdcInit(usize),

    /// The requested panel geometry is not supported by the driver.
    #[error("display geometry {width}x{height} unsupported")]
    DisplayGeometry {
        /// Requested width in pixels.
        width: i32,
        /// Requested height in pixels.
        height: i32,
    },

    /// The encoder did not come up.
    #[error("encoder failed to initialize")]
    EncoderInit,
}

//! DAC code conversion.
//!
//! The engine works in nominal [−1, 1] floats; converters want unsigned
//! codes. Two laws cover the whole instrument:
//!
//! - left/right go to 8-bit on-chip DACs: `clamp(round((x+1)·127.5), 0, 255)`
//! - stereo and the seven per-partial outputs go to 12-bit converters:
//!   `clamp(round((x+1)·2047.5), 0, 4095)`
//!
//! The clamp is the only place the additive sum's excursion past unit
//! range is reduced; the engine itself never limits.

use libm::roundf;
use ondas_core::{CvFrame, Frame, NUM_CV_INPUTS, NUM_HARMONICS};

/// Full-scale reading of the 12-bit CV ADCs, used as the normalization
/// divisor by [`cv_from_adc`].
pub const ADC_FULL_SCALE: f32 = 4095.0;

/// Converts a sample to an 8-bit DAC code.
#[inline]
pub fn to_dac8(sample: f32) -> u8 {
    roundf((sample + 1.0) * 127.5).clamp(0.0, 255.0) as u8
}

/// Converts a sample to a 12-bit DAC code.
#[inline]
pub fn to_dac12(sample: f32) -> u16 {
    roundf((sample + 1.0) * 2047.5).clamp(0.0, 4095.0) as u16
}

/// Normalizes raw 12-bit ADC counts into a [`CvFrame`].
#[inline]
pub fn cv_from_adc(raw: [u16; NUM_CV_INPUTS]) -> CvFrame {
    CvFrame::new(raw.map(|count| count as f32 / ADC_FULL_SCALE))
}

/// One frame's worth of converted DAC codes.
///
/// Bundles what a [`SampleSink`](crate::SampleSink) adapter forwards to
/// its converters each tick; the addressing of the individual parts is
/// the adapter's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DacCodes {
    /// Left channel, 8-bit.
    pub left: u8,
    /// Right channel, 8-bit.
    pub right: u8,
    /// Stereo sum, 12-bit.
    pub stereo: u16,
    /// Per-partial outputs, 12-bit each.
    pub wave: [u16; NUM_HARMONICS],
}

impl DacCodes {
    /// Converts a frame with the published laws.
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            left: to_dac8(frame.left),
            right: to_dac8(frame.right),
            stereo: to_dac12(frame.stereo),
            wave: frame.wave.map(to_dac12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dac8_endpoints_and_midpoint() {
        assert_eq!(to_dac8(-1.0), 0);
        assert_eq!(to_dac8(0.0), 128); // round(127.5), half away from zero
        assert_eq!(to_dac8(1.0), 255);
    }

    #[test]
    fn dac8_saturates_outside_nominal_range() {
        assert_eq!(to_dac8(-2.5), 0);
        assert_eq!(to_dac8(3.0), 255);
    }

    #[test]
    fn dac12_endpoints_and_midpoint() {
        assert_eq!(to_dac12(-1.0), 0);
        assert_eq!(to_dac12(0.0), 2048);
        assert_eq!(to_dac12(1.0), 4095);
    }

    #[test]
    fn dac12_saturates_the_additive_sum() {
        // Seven full-scale partials can sum to 7.0.
        assert_eq!(to_dac12(7.0), 4095);
        assert_eq!(to_dac12(-7.0), 0);
    }

    #[test]
    fn codes_convert_every_channel() {
        let mut frame = Frame::silence();
        frame.left = -1.0;
        frame.right = 1.0;
        frame.stereo = 0.0;
        frame.wave[3] = 1.0;

        let codes = DacCodes::from_frame(&frame);
        assert_eq!(codes.left, 0);
        assert_eq!(codes.right, 255);
        assert_eq!(codes.stereo, 2048);
        assert_eq!(codes.wave[3], 4095);
        assert_eq!(codes.wave[0], 2048);
    }

    #[test]
    fn adc_counts_normalize_to_unit_range() {
        let cv = cv_from_adc([0, 4095, 2048, 1024]);
        assert_eq!(cv.get(0), 0.0);
        assert_eq!(cv.get(1), 1.0);
        assert!((cv.get(2) - 0.50012).abs() < 1e-4);
        assert!((cv.get(3) - 0.25006).abs() < 1e-4);
    }
}

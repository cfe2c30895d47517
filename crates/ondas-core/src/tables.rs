//! Read-only lookup tables: quantization scales and the sine table.

use crate::config::{NUM_HARMONICS, NUM_SAMPLES};
use core::f32::consts::PI;
use libm::sinf;

/// Musical scale used to quantize the seven partials.
///
/// Each scale is a table of seven multiplicative ratios relative to the
/// fundamental. A scale commit copies its table verbatim into the harmonic
/// amplitudes (see [`SynthState::commit_scale`](crate::SynthState::commit_scale)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    /// Equal-tempered major intervals.
    #[default]
    Major,
    /// Equal-tempered natural minor intervals.
    Minor,
    /// Just ratios from the natural harmonic series.
    NaturalHarmonic,
    /// Pentatonic ratios extended past the octave.
    Pentatonic,
}

impl Scale {
    /// Number of scale variants.
    pub const COUNT: usize = 4;

    /// Selects a scale by index, reduced modulo [`Self::COUNT`].
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Scale::Major,
            1 => Scale::Minor,
            2 => Scale::NaturalHarmonic,
            _ => Scale::Pentatonic,
        }
    }

    /// Position of this variant in menu order.
    pub fn index(self) -> usize {
        match self {
            Scale::Major => 0,
            Scale::Minor => 1,
            Scale::NaturalHarmonic => 2,
            Scale::Pentatonic => 3,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "Major",
            Scale::Minor => "Minor",
            Scale::NaturalHarmonic => "Natural Harmonic",
            Scale::Pentatonic => "Pentatonic",
        }
    }

    /// The scale's seven frequency ratios.
    ///
    /// Values are preserved bit-for-bit from the instrument's tuning; note
    /// that Pentatonic extends to 2.25, above the nominal amplitude range.
    pub fn ratios(self) -> &'static [f32; NUM_HARMONICS] {
        match self {
            Scale::Major => &[1.0, 1.122, 1.26, 1.335, 1.5, 1.682, 1.888],
            Scale::Minor => &[1.0, 1.122, 1.189, 1.335, 1.5, 1.587, 1.782],
            Scale::NaturalHarmonic => &[1.0, 1.125, 1.25, 1.375, 1.5, 1.625, 1.75],
            Scale::Pentatonic => &[1.0, 1.125, 1.25, 1.5, 1.75, 2.0, 2.25],
        }
    }
}

/// Precomputed sine over one turn, [`NUM_SAMPLES`] entries.
///
/// Built once at init and read-only afterwards. The display layer uses it
/// for its composite-waveform traces; the audio tick computes sine directly
/// because its argument is a product of the continuously modulated partial
/// frequency, not a table index.
///
/// Entry `k` holds `sin(2π · k / NUM_SAMPLES)`.
#[derive(Debug)]
pub struct SineTable {
    samples: [f32; NUM_SAMPLES],
}

impl SineTable {
    /// Builds the table.
    pub fn new() -> Self {
        let mut samples = [0.0; NUM_SAMPLES];
        for (k, sample) in samples.iter_mut().enumerate() {
            *sample = sinf(2.0 * PI * k as f32 / NUM_SAMPLES as f32);
        }
        Self { samples }
    }

    /// Sine at table position `index`, wrapped modulo the table length.
    #[inline]
    pub fn sin_at(&self, index: usize) -> f32 {
        self.samples[index % NUM_SAMPLES]
    }

    /// Cosine at table position `index`: the sine a quarter turn ahead.
    #[inline]
    pub fn cos_at(&self, index: usize) -> f32 {
        self.sin_at(index + NUM_SAMPLES / 4)
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::new()
    }
}

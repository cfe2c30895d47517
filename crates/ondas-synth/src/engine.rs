//! The per-sample synthesis tick.

use core::f32::consts::PI;
use libm::{exp2f, fabsf, sinf};
use ondas_core::{CvFrame, CvMode, Frame, NUM_HARMONICS, NUM_SAMPLES, SAMPLE_RATE, SynthState, Waveform};

/// The harmonic synthesis engine.
///
/// Stateless apart from the configured sample rate: the wavetable position
/// lives in [`SynthState`] so the control loop and the display can observe
/// it. One engine instance serves the whole instrument.
///
/// # Timing
///
/// [`tick`](Self::tick) must complete within one sample period
/// (1 ms at the reference 1 kHz rate). The body is two fixed-bound loops
/// over seven partials and four CV inputs with no branches that depend on
/// signal values, so its runtime is effectively constant.
///
/// # Example
///
/// ```rust
/// use ondas_core::{CvFrame, SynthState};
/// use ondas_synth::AudioEngine;
///
/// let state = SynthState::new();
/// let engine = AudioEngine::new();
/// let frame = engine.tick(&state, CvFrame::zero());
///
/// // Amplitudes default to fundamental-only; at sample index 0 the sine
/// // of phase zero is silent.
/// assert_eq!(frame.left, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AudioEngine {
    sample_rate: f32,
}

impl AudioEngine {
    /// Creates an engine at the build-time sample rate.
    pub fn new() -> Self {
        Self::with_sample_rate(SAMPLE_RATE as f32)
    }

    /// Creates an engine at an explicit sample rate (tests, offline use).
    pub fn with_sample_rate(sample_rate: f32) -> Self {
        Self { sample_rate }
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Produces one output frame and advances the sample index.
    ///
    /// For each partial `i`:
    ///
    /// 1. start from `base_frequency · (i + 1)`;
    /// 2. add cross-modulation `Σ_j M[j][i] · amp[j]` — an additive
    ///    frequency offset, not phase modulation;
    /// 3. apply CV routing in CV-index order 0..3 (linear FM adds,
    ///    exponential FM and 1V/oct multiply, Amplitude scales `amp[i]`
    ///    in place);
    /// 4. evaluate the waveform and accumulate into the pan-weighted
    ///    left/right sums, the stereo sum, and the per-partial output.
    ///
    /// Saw, triangle, and pulse deliberately use the sample index as their
    /// phase, ignoring the computed frequency; only sine tracks it. The
    /// resulting partial-independent periodicity is part of the
    /// instrument's sound.
    #[inline]
    pub fn tick(&self, state: &SynthState, cv: CvFrame) -> Frame {
        let mut frame = Frame::silence();
        let index = state.sample_index();
        let base = state.base_frequency();
        let waveform = state.waveform();

        for i in 0..NUM_HARMONICS {
            let mut frequency = base * (i as f32 + 1.0);
            for j in 0..NUM_HARMONICS {
                frequency += state.modulation(j, i) * state.amplitude(j);
            }
            for (k, value) in cv.iter() {
                match state.cv_assignment(k) {
                    CvMode::None => {}
                    CvMode::LinFm => frequency += value * base,
                    CvMode::ExpFm => frequency *= exp2f(value),
                    CvMode::Amplitude => state.scale_amplitude(i, value),
                    CvMode::Pitch1VOct => frequency *= exp2f(value - 1.0),
                }
            }

            let sample = state.amplitude(i) * self.waveform_sample(waveform, index, frequency);
            let pan = state.pan(i);
            frame.left += sample * (1.0 - pan);
            frame.right += sample * pan;
            frame.stereo += sample;
            frame.wave[i] = sample;
        }

        state.advance_sample_index();
        frame
    }

    /// The frequency stage of [`tick`](Self::tick) for one partial:
    /// base, cross-modulation, and the frequency-affecting CV routings.
    ///
    /// Amplitude routing has no frequency effect and is not applied here,
    /// so this is a pure query — useful for instrumentation and tests.
    pub fn partial_frequency(&self, state: &SynthState, partial: usize, cv: &CvFrame) -> f32 {
        let base = state.base_frequency();
        let mut frequency = base * (partial as f32 + 1.0);
        for j in 0..NUM_HARMONICS {
            frequency += state.modulation(j, partial) * state.amplitude(j);
        }
        for (k, value) in cv.iter() {
            match state.cv_assignment(k) {
                CvMode::None | CvMode::Amplitude => {}
                CvMode::LinFm => frequency += value * base,
                CvMode::ExpFm => frequency *= exp2f(value),
                CvMode::Pitch1VOct => frequency *= exp2f(value - 1.0),
            }
        }
        frequency
    }

    #[inline]
    fn waveform_sample(&self, waveform: Waveform, index: usize, frequency: f32) -> f32 {
        let wrapped = index % NUM_SAMPLES;
        let phase = wrapped as f32 / NUM_SAMPLES as f32;
        match waveform {
            Waveform::Sine => sinf(2.0 * PI * (index as f32 * frequency / self.sample_rate)),
            Waveform::Saw => 2.0 * phase - 1.0,
            Waveform::Triangle => 2.0 * fabsf(2.0 * phase - 1.0) - 1.0,
            Waveform::Pulse => {
                if wrapped < NUM_SAMPLES / 2 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

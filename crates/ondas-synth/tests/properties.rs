//! Property-based tests for the ondas sample tick.
//!
//! Randomizes amplitudes, pans, the modulation matrix, and CV routing,
//! then checks the invariants the rest of the system relies on: finite
//! output, the channel sum identity, the pan law, and strict sample-index
//! advancement.

use ondas_core::{CvFrame, CvMode, NUM_HARMONICS, NUM_SAMPLES, SynthState, Waveform};
use ondas_synth::AudioEngine;
use proptest::prelude::*;

fn populate(
    state: &SynthState,
    amps: &[f32; NUM_HARMONICS],
    pans: &[f32; NUM_HARMONICS],
    matrix: &[[f32; NUM_HARMONICS]; NUM_HARMONICS],
) {
    for i in 0..NUM_HARMONICS {
        state.set_amplitude(i, amps[i]);
        state.set_pan(i, pans[i]);
        for j in 0..NUM_HARMONICS {
            state.set_modulation(j, i, matrix[j][i]);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any in-domain state and CV reading, every frame channel is
    /// finite and `left + right` equals the sum of the per-partial
    /// contributions (which equals `stereo`).
    #[test]
    fn frame_channels_are_finite_and_sum(
        amps in prop::array::uniform7(0.0f32..=1.0f32),
        pans in prop::array::uniform7(0.0f32..=1.0f32),
        matrix in prop::array::uniform7(prop::array::uniform7(0.0f32..=1.0f32)),
        routing in prop::array::uniform4(0usize..5),
        cv in prop::array::uniform4(0.0f32..=1.0f32),
        waveform in 0usize..4,
        warmup in 0usize..64,
    ) {
        let state = SynthState::new();
        populate(&state, &amps, &pans, &matrix);
        state.set_waveform(Waveform::from_index(waveform));
        for (k, &mode) in routing.iter().enumerate() {
            state.cycle_cv_assignment(k, mode as i32);
        }

        let engine = AudioEngine::new();
        let reading = CvFrame::new(cv);
        let mut frame = engine.tick(&state, reading);
        for _ in 0..warmup {
            frame = engine.tick(&state, reading);
        }

        prop_assert!(frame.left.is_finite());
        prop_assert!(frame.right.is_finite());
        prop_assert!(frame.stereo.is_finite());

        let wave_sum: f32 = frame.wave.iter().sum();
        let tolerance = 1e-4 * (1.0 + wave_sum.abs());
        prop_assert!(
            (frame.left + frame.right - wave_sum).abs() < tolerance,
            "left + right = {} but Σ wave = {}",
            frame.left + frame.right,
            wave_sum
        );
        prop_assert!(
            (frame.stereo - wave_sum).abs() < tolerance,
            "stereo = {} but Σ wave = {}",
            frame.stereo,
            wave_sum
        );
    }

    /// Amplitudes, pans, and matrix cells stay inside [0, 1] across ticks,
    /// including with an Amplitude-routed CV shrinking the amplitudes.
    #[test]
    fn domains_hold_across_ticks(
        amps in prop::array::uniform7(0.0f32..=1.0f32),
        pans in prop::array::uniform7(0.0f32..=1.0f32),
        matrix in prop::array::uniform7(prop::array::uniform7(0.0f32..=1.0f32)),
        cv in prop::array::uniform4(0.0f32..=1.0f32),
        ticks in 1usize..64,
    ) {
        let state = SynthState::new();
        populate(&state, &amps, &pans, &matrix);
        state.cycle_cv_assignment(0, CvMode::Amplitude.index() as i32);

        let engine = AudioEngine::new();
        for _ in 0..ticks {
            engine.tick(&state, CvFrame::new(cv));
        }

        for i in 0..NUM_HARMONICS {
            let amp = state.amplitude(i);
            prop_assert!((0.0..=1.0).contains(&amp), "amp[{i}] = {amp}");
            let pan = state.pan(i);
            prop_assert!((0.0..=1.0).contains(&pan), "pan[{i}] = {pan}");
            for j in 0..NUM_HARMONICS {
                let depth = state.modulation(j, i);
                prop_assert!((0.0..=1.0).contains(&depth), "M[{j}][{i}] = {depth}");
            }
        }
    }

    /// The sample index advances by exactly one per tick, modulo the
    /// wavetable period, regardless of state.
    #[test]
    fn sample_index_is_strictly_sequential(
        amps in prop::array::uniform7(0.0f32..=1.0f32),
        ticks in 1usize..1024,
    ) {
        let state = SynthState::new();
        for (i, &a) in amps.iter().enumerate() {
            state.set_amplitude(i, a);
        }
        let engine = AudioEngine::new();
        for tick in 0..ticks {
            prop_assert_eq!(state.sample_index(), tick % NUM_SAMPLES);
            engine.tick(&state, CvFrame::zero());
        }
    }

    /// Pan law: a hard-panned partial contributes to exactly one channel,
    /// and the silent channel is exactly zero.
    #[test]
    fn hard_pan_isolates_channels(
        amp in 0.01f32..=1.0f32,
        right in any::<bool>(),
        warmup in 0usize..NUM_SAMPLES,
    ) {
        let state = SynthState::new();
        state.set_amplitude(0, amp);
        state.set_pan(0, if right { 1.0 } else { 0.0 });

        let engine = AudioEngine::new();
        let mut frame = engine.tick(&state, CvFrame::zero());
        for _ in 0..warmup {
            frame = engine.tick(&state, CvFrame::zero());
        }

        if right {
            prop_assert_eq!(frame.left, 0.0);
            prop_assert_eq!(frame.right, frame.wave[0]);
        } else {
            prop_assert_eq!(frame.right, 0.0);
            prop_assert_eq!(frame.left, frame.wave[0]);
        }
    }
}

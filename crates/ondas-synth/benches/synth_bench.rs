//! Criterion benchmarks for the ondas sample tick
//!
//! Run with: cargo bench -p ondas-synth
//!
//! The tick has a hard deadline of one sample period (1 ms at the
//! reference rate); these benches are the observability story for it.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ondas_core::{CvFrame, CvMode, NUM_HARMONICS, SynthState, Waveform};
use ondas_synth::AudioEngine;

fn dense_state() -> SynthState {
    let state = SynthState::new();
    for i in 0..NUM_HARMONICS {
        state.set_amplitude(i, 0.7);
        state.set_pan(i, 0.3);
        for j in 0..NUM_HARMONICS {
            state.set_modulation(j, i, 0.5);
        }
    }
    state
}

fn bench_tick_waveforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("AudioEngine");

    let waveforms = [
        ("Sine", Waveform::Sine),
        ("Saw", Waveform::Saw),
        ("Triangle", Waveform::Triangle),
        ("Pulse", Waveform::Pulse),
    ];

    for (name, waveform) in waveforms {
        let state = dense_state();
        state.set_waveform(waveform);
        let engine = AudioEngine::new();
        group.bench_function(format!("tick_{name}"), |b| {
            b.iter(|| black_box(engine.tick(&state, CvFrame::zero())))
        });
    }

    group.finish();
}

fn bench_tick_cv_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("AudioEngine_CV");

    // Worst case: every CV input routed to a frequency-shaping mode.
    let state = dense_state();
    state.cycle_cv_assignment(0, CvMode::ExpFm.index() as i32);
    state.cycle_cv_assignment(1, CvMode::Pitch1VOct.index() as i32);
    state.cycle_cv_assignment(2, CvMode::LinFm.index() as i32);
    state.cycle_cv_assignment(3, CvMode::ExpFm.index() as i32);

    let engine = AudioEngine::new();
    let cv = CvFrame::new([0.25, 0.5, 0.75, 1.0]);
    group.bench_function("tick_all_routed", |b| {
        b.iter(|| black_box(engine.tick(&state, cv)))
    });

    group.finish();
}

criterion_group!(benches, bench_tick_waveforms, bench_tick_cv_routing);
criterion_main!(benches);

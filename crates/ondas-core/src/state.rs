//! The shared instrument state and its commit rules.

use crate::atomic::AtomicF32;
use crate::config::{BASE_FREQUENCIES, NUM_CV_INPUTS, NUM_HARMONICS, NUM_SAMPLES};
use crate::modes::{CvMode, MenuMode, Waveform};
use crate::tables::Scale;
use core::array;
use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

/// The authoritative in-memory model of the instrument.
///
/// A single `SynthState` exists for the lifetime of the program and is the
/// only object shared between the two execution contexts:
///
/// - the **timer context** (the sample tick) reads the base frequency,
///   amplitudes, pans, modulation matrix, CV routing, and waveform; it
///   writes `sample_index` and, when a CV input is routed to Amplitude,
///   the harmonic amplitudes;
/// - the **control context** (encoder/menu handling) writes everything
///   else.
///
/// Every tick-visible field is an atomic scalar accessed with relaxed
/// ordering, so the tick never blocks. Composite updates — a scale commit,
/// a waveform or CV tag change — run inside a short critical section so
/// the tick observes them whole.
///
/// All mutators clamp their argument into the field's valid domain; the
/// one documented exception is [`commit_scale`](Self::commit_scale).
#[derive(Debug)]
pub struct SynthState {
    base_frequency: AtomicF32,
    base_frequency_index: AtomicU8,
    amplitudes: [AtomicF32; NUM_HARMONICS],
    pans: [AtomicF32; NUM_HARMONICS],
    /// `matrix[j][i]` is the modulation depth from partial `j` into
    /// partial `i`. The diagonal is permitted (self-FM).
    matrix: [[AtomicF32; NUM_HARMONICS]; NUM_HARMONICS],
    scale: AtomicU8,
    waveform: AtomicU8,
    cv_assignments: [AtomicU8; NUM_CV_INPUTS],
    harmonic_index: AtomicU8,
    current_mode: AtomicU8,
    menu_index: AtomicU8,
    xy_swapped: AtomicBool,
    xy_bias_x: AtomicF32,
    xy_bias_y: AtomicF32,
    /// Advanced by the audio engine only, modulo [`NUM_SAMPLES`].
    sample_index: AtomicU32,
}

impl SynthState {
    /// Creates the initial state: fundamental at full level, 440 Hz base,
    /// centered pans, empty modulation matrix, sine waveform, no CV
    /// routing, default view.
    pub fn new() -> Self {
        Self {
            base_frequency: AtomicF32::new(440.0),
            base_frequency_index: AtomicU8::new(1),
            amplitudes: array::from_fn(|i| AtomicF32::new(if i == 0 { 1.0 } else { 0.0 })),
            pans: array::from_fn(|_| AtomicF32::new(0.5)),
            matrix: array::from_fn(|_| array::from_fn(|_| AtomicF32::new(0.0))),
            scale: AtomicU8::new(Scale::Major.index() as u8),
            waveform: AtomicU8::new(Waveform::Sine.index() as u8),
            cv_assignments: array::from_fn(|_| AtomicU8::new(CvMode::None.index() as u8)),
            harmonic_index: AtomicU8::new(0),
            current_mode: AtomicU8::new(MenuMode::DefaultView.tag()),
            menu_index: AtomicU8::new(0),
            xy_swapped: AtomicBool::new(false),
            xy_bias_x: AtomicF32::new(0.0),
            xy_bias_y: AtomicF32::new(0.0),
            sample_index: AtomicU32::new(0),
        }
    }

    // ── Base frequency ──────────────────────────────────────────────────

    /// Current base frequency in Hz.
    #[inline]
    pub fn base_frequency(&self) -> f32 {
        self.base_frequency.load()
    }

    /// Index of the committed base frequency in [`BASE_FREQUENCIES`].
    pub fn base_frequency_index(&self) -> usize {
        self.base_frequency_index.load(Ordering::Relaxed) as usize
    }

    /// Commits the base frequency at `index` (reduced modulo the table
    /// length). Index and frequency are updated together so the tick never
    /// sees them disagree.
    pub fn commit_base_frequency(&self, index: usize) {
        let index = index % BASE_FREQUENCIES.len();
        critical_section::with(|_| {
            self.base_frequency_index.store(index as u8, Ordering::Relaxed);
            self.base_frequency.store(BASE_FREQUENCIES[index]);
        });
        #[cfg(feature = "tracing")]
        tracing::debug!("commit: base frequency {} Hz", BASE_FREQUENCIES[index]);
    }

    // ── Amplitudes ──────────────────────────────────────────────────────

    /// Amplitude of partial `index`.
    #[inline]
    pub fn amplitude(&self, index: usize) -> f32 {
        self.amplitudes[index].load()
    }

    /// Snapshot of all seven amplitudes.
    pub fn amplitudes(&self) -> [f32; NUM_HARMONICS] {
        array::from_fn(|i| self.amplitude(i))
    }

    /// Sets the amplitude of partial `index`, clamped to [0, 1].
    pub fn set_amplitude(&self, index: usize, value: f32) {
        self.amplitudes[index].store(value.clamp(0.0, 1.0));
    }

    /// Steps the amplitude of partial `index` by `steps · 0.1`, clamped.
    pub fn step_amplitude(&self, index: usize, steps: i32) {
        self.set_amplitude(index, self.amplitude(index) + 0.1 * steps as f32);
    }

    /// Multiplies the amplitude of partial `index` by `factor` without
    /// clamping.
    ///
    /// This is the tick's VCA writeback for an Amplitude-routed CV. The
    /// factor comes from a [`CvFrame`](crate::CvFrame) and is already in
    /// [0, 1], so the product never grows; skipping the clamp keeps
    /// scale-committed ratios above 1.0 intact.
    #[inline]
    pub fn scale_amplitude(&self, index: usize, factor: f32) {
        self.amplitudes[index].store(self.amplitude(index) * factor);
    }

    // ── Panning ─────────────────────────────────────────────────────────

    /// Pan of partial `index`: 0 is full left, 1 is full right.
    #[inline]
    pub fn pan(&self, index: usize) -> f32 {
        self.pans[index].load()
    }

    /// Sets the pan of partial `index`, clamped to [0, 1].
    pub fn set_pan(&self, index: usize, value: f32) {
        self.pans[index].store(value.clamp(0.0, 1.0));
    }

    /// Steps the pan of partial `index` by `steps · 0.1`, clamped.
    pub fn step_pan(&self, index: usize, steps: i32) {
        self.set_pan(index, self.pan(index) + 0.1 * steps as f32);
    }

    // ── Modulation matrix ───────────────────────────────────────────────

    /// Modulation depth from partial `source` into partial `target`.
    #[inline]
    pub fn modulation(&self, source: usize, target: usize) -> f32 {
        self.matrix[source][target].load()
    }

    /// Sets a modulation depth, clamped to [0, 1].
    pub fn set_modulation(&self, source: usize, target: usize, value: f32) {
        self.matrix[source][target].store(value.clamp(0.0, 1.0));
    }

    /// Steps a modulation depth by `steps · 0.1`, clamped.
    pub fn step_modulation(&self, source: usize, target: usize, steps: i32) {
        self.set_modulation(source, target, self.modulation(source, target) + 0.1 * steps as f32);
    }

    // ── Scale ───────────────────────────────────────────────────────────

    /// The most recently committed scale.
    pub fn scale(&self) -> Scale {
        Scale::from_index(self.scale.load(Ordering::Relaxed) as usize)
    }

    /// Commits a scale: writes its seven ratios verbatim into the harmonic
    /// amplitudes, overwriting them, and records the scale tag.
    ///
    /// The ratios are *not* clamped — Pentatonic reaches 2.25 — so the
    /// amplitude field is dual-purposed until the next per-partial edit
    /// re-clamps a cell. The whole table is written inside one critical
    /// section so the tick never sees a half-applied scale.
    pub fn commit_scale(&self, scale: Scale) {
        let ratios = scale.ratios();
        critical_section::with(|_| {
            self.scale.store(scale.index() as u8, Ordering::Relaxed);
            for (amplitude, &ratio) in self.amplitudes.iter().zip(ratios.iter()) {
                amplitude.store(ratio);
            }
        });
        #[cfg(feature = "tracing")]
        tracing::debug!("commit: scale {}", scale.name());
    }

    // ── Waveform ────────────────────────────────────────────────────────

    /// Current base waveform.
    #[inline]
    pub fn waveform(&self) -> Waveform {
        Waveform::from_index(self.waveform.load(Ordering::Relaxed) as usize)
    }

    /// Sets the base waveform.
    pub fn set_waveform(&self, waveform: Waveform) {
        critical_section::with(|_| {
            self.waveform.store(waveform.index() as u8, Ordering::Relaxed);
        });
        #[cfg(feature = "tracing")]
        tracing::debug!("commit: waveform {}", waveform.name());
    }

    // ── CV routing ──────────────────────────────────────────────────────

    /// Routing of CV input `index`.
    #[inline]
    pub fn cv_assignment(&self, index: usize) -> CvMode {
        CvMode::from_index(self.cv_assignments[index].load(Ordering::Relaxed) as usize)
    }

    /// Advances the routing of CV input `index` by `steps` through the
    /// five modes, wrapping in either direction.
    pub fn cycle_cv_assignment(&self, index: usize, steps: i32) {
        let current = self.cv_assignment(index).index() as i32;
        let next = (current + steps).rem_euclid(CvMode::COUNT as i32) as usize;
        critical_section::with(|_| {
            self.cv_assignments[index].store(next as u8, Ordering::Relaxed);
        });
        #[cfg(feature = "tracing")]
        tracing::debug!("commit: cv {} -> {}", index, CvMode::from_index(next).name());
    }

    // ── Selection, mode, oscilloscope options ───────────────────────────

    /// Index of the partial currently being edited.
    #[inline]
    pub fn harmonic_index(&self) -> usize {
        self.harmonic_index.load(Ordering::Relaxed) as usize
    }

    /// Selects the edited partial, reduced modulo [`NUM_HARMONICS`].
    pub fn select_harmonic(&self, index: usize) {
        self.harmonic_index
            .store((index % NUM_HARMONICS) as u8, Ordering::Relaxed);
    }

    /// The screen currently shown.
    #[inline]
    pub fn current_mode(&self) -> MenuMode {
        MenuMode::from_tag(self.current_mode.load(Ordering::Relaxed))
    }

    /// Switches the shown screen.
    pub fn set_mode(&self, mode: MenuMode) {
        self.current_mode.store(mode.tag(), Ordering::Relaxed);
    }

    /// Cursor position on the current screen, already reduced modulo the
    /// screen's entry count by the control FSM.
    #[inline]
    pub fn menu_index(&self) -> usize {
        self.menu_index.load(Ordering::Relaxed) as usize
    }

    /// Moves the cursor. Callers reduce modulo
    /// [`MenuMode::entry_count`] before storing.
    pub fn set_menu_index(&self, index: usize) {
        self.menu_index.store(index as u8, Ordering::Relaxed);
    }

    /// Whether the XY oscilloscope axes are exchanged.
    pub fn xy_swapped(&self) -> bool {
        self.xy_swapped.load(Ordering::Relaxed)
    }

    /// Exchanges (or restores) the XY oscilloscope axes.
    pub fn set_xy_swapped(&self, swapped: bool) {
        self.xy_swapped.store(swapped, Ordering::Relaxed);
    }

    /// XY oscilloscope beam offsets, each in [−1, 1].
    pub fn xy_bias(&self) -> (f32, f32) {
        (self.xy_bias_x.load(), self.xy_bias_y.load())
    }

    /// Sets the XY beam offsets, clamped to [−1, 1].
    pub fn set_xy_bias(&self, x: f32, y: f32) {
        self.xy_bias_x.store(x.clamp(-1.0, 1.0));
        self.xy_bias_y.store(y.clamp(-1.0, 1.0));
    }

    // ── Sample index ────────────────────────────────────────────────────

    /// Position in the wavetable period, in [0, [`NUM_SAMPLES`]).
    #[inline]
    pub fn sample_index(&self) -> usize {
        self.sample_index.load(Ordering::Relaxed) as usize
    }

    /// Advances the sample index by one, modulo [`NUM_SAMPLES`].
    ///
    /// The audio engine is the only caller; there is exactly one writer,
    /// so a plain load/store pair is race-free.
    #[inline]
    pub fn advance_sample_index(&self) {
        let next = (self.sample_index.load(Ordering::Relaxed) + 1) % NUM_SAMPLES as u32;
        self.sample_index.store(next, Ordering::Relaxed);
    }
}

impl Default for SynthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_power_on_defaults() {
        let state = SynthState::new();
        assert_eq!(state.base_frequency(), 440.0);
        assert_eq!(state.base_frequency_index(), 1);
        assert_eq!(state.amplitudes(), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        for i in 0..NUM_HARMONICS {
            assert_eq!(state.pan(i), 0.5);
            for j in 0..NUM_HARMONICS {
                assert_eq!(state.modulation(j, i), 0.0);
            }
        }
        assert_eq!(state.waveform(), Waveform::Sine);
        assert_eq!(state.current_mode(), MenuMode::DefaultView);
        for k in 0..NUM_CV_INPUTS {
            assert_eq!(state.cv_assignment(k), CvMode::None);
        }
        assert_eq!(state.sample_index(), 0);
    }

    #[test]
    fn amplitude_edits_clamp() {
        let state = SynthState::new();
        state.set_amplitude(2, 1.7);
        assert_eq!(state.amplitude(2), 1.0);
        state.set_amplitude(2, -0.3);
        assert_eq!(state.amplitude(2), 0.0);
    }

    #[test]
    fn amplitude_steps_saturate_at_bounds() {
        let state = SynthState::new();
        for _ in 0..15 {
            state.step_amplitude(3, 1);
        }
        assert_eq!(state.amplitude(3), 1.0);
        for _ in 0..15 {
            state.step_amplitude(3, -1);
        }
        assert_eq!(state.amplitude(3), 0.0);
    }

    #[test]
    fn vca_writeback_does_not_clamp_scale_ratios() {
        let state = SynthState::new();
        state.commit_scale(Scale::Pentatonic);
        state.scale_amplitude(6, 1.0);
        assert_eq!(state.amplitude(6), 2.25);
        state.scale_amplitude(6, 0.5);
        assert_eq!(state.amplitude(6), 1.125);
    }

    #[test]
    fn frequency_commit_round_trips() {
        let state = SynthState::new();
        for (k, &expected) in BASE_FREQUENCIES.iter().enumerate() {
            state.commit_base_frequency(k);
            assert_eq!(state.base_frequency(), expected);
            assert_eq!(state.base_frequency_index(), k);
        }
        // Out-of-range index wraps.
        state.commit_base_frequency(5);
        assert_eq!(state.base_frequency(), BASE_FREQUENCIES[1]);
    }

    #[test]
    fn scale_commit_overwrites_amplitudes() {
        let state = SynthState::new();
        state.set_amplitude(0, 1.0);
        state.commit_scale(Scale::Pentatonic);
        assert_eq!(state.amplitudes(), *Scale::Pentatonic.ratios());
        assert_eq!(state.scale(), Scale::Pentatonic);
        // The last ratios exceed 1.0 until re-clamped by an edit.
        assert!(state.amplitude(5) > 1.0);
        state.step_amplitude(5, 1);
        assert_eq!(state.amplitude(5), 1.0);
    }

    #[test]
    fn cv_cycle_returns_after_five_steps() {
        let state = SynthState::new();
        state.cycle_cv_assignment(2, 1);
        let start = state.cv_assignment(2);
        for _ in 0..CvMode::COUNT {
            state.cycle_cv_assignment(2, 1);
        }
        assert_eq!(state.cv_assignment(2), start);
    }

    #[test]
    fn cv_cycle_handles_negative_steps() {
        let state = SynthState::new();
        state.cycle_cv_assignment(0, -1);
        assert_eq!(state.cv_assignment(0), CvMode::Pitch1VOct);
        state.cycle_cv_assignment(0, -4);
        assert_eq!(state.cv_assignment(0), CvMode::None);
    }

    #[test]
    fn harmonic_selection_wraps() {
        let state = SynthState::new();
        state.select_harmonic(9);
        assert_eq!(state.harmonic_index(), 2);
    }

    #[test]
    fn modulation_steps_clamp() {
        let state = SynthState::new();
        state.step_modulation(1, 4, 12);
        assert_eq!(state.modulation(1, 4), 1.0);
        state.step_modulation(1, 4, -20);
        assert_eq!(state.modulation(1, 4), 0.0);
    }

    #[test]
    fn sample_index_wraps_at_period() {
        let state = SynthState::new();
        for _ in 0..NUM_SAMPLES - 1 {
            state.advance_sample_index();
        }
        assert_eq!(state.sample_index(), NUM_SAMPLES - 1);
        state.advance_sample_index();
        assert_eq!(state.sample_index(), 0);
    }

    #[test]
    fn xy_bias_clamps_to_unit_range() {
        let state = SynthState::new();
        state.set_xy_bias(2.0, -3.0);
        assert_eq!(state.xy_bias(), (1.0, -1.0));
        state.set_xy_swapped(true);
        assert!(state.xy_swapped());
    }
}

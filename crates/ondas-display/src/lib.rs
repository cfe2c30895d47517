//! Ondas Display - view functions and render orchestration
//!
//! The renderer runs in the cooperative main loop at roughly 10 Hz,
//! picking exactly one view function per redraw from the shared state's
//! `current_mode`. Views are pure functions of
//! [`SynthState`](ondas_core::SynthState) plus lightweight visual state
//! (particle positions, ripple phases) that the renderer owns and that
//! never feeds back into audio.
//!
//! Pixel work goes through the
//! [`DisplayBackend`](ondas_platform::DisplayBackend) contract; the
//! concrete panel driver is out of this crate's sight.
//!
//! # Example
//!
//! ```rust
//! use ondas_core::SynthState;
//! use ondas_display::Renderer;
//! use ondas_platform::testing::BufferDisplay;
//!
//! let state = SynthState::new();
//! let mut renderer = Renderer::new(0x1234_5678);
//! let mut display = BufferDisplay::new();
//!
//! renderer.draw(&state, &mut display);
//! assert_eq!(display.presents(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod particles;
mod ripples;
mod rng;
mod text;
pub mod views;

use ondas_core::{MenuMode, SineTable, SynthState};
use ondas_platform::DisplayBackend;
use particles::ParticleField;
use ripples::RippleField;
use rng::XorShift32;

/// Owns the per-view visual state and dispatches redraws.
///
/// Dispatch is a single exhaustive match on the mode variant: each menu
/// page and each display view has its own function. Nothing here is
/// stored as a function pointer, and nothing here writes to
/// [`SynthState`].
pub struct Renderer {
    table: SineTable,
    particles: ParticleField,
    ripples: RippleField,
}

impl Renderer {
    /// Builds the sine table and seeds the visual randomness.
    ///
    /// Two fields get decorrelated PRNG streams derived from `seed`; the
    /// seed only shapes the visuals, so any value (a boot counter, a
    /// fixed constant) is fine.
    pub fn new(seed: u32) -> Self {
        Self {
            table: SineTable::new(),
            particles: ParticleField::new(XorShift32::new(seed)),
            ripples: RippleField::new(XorShift32::new(seed ^ 0x9E37_79B9)),
        }
    }

    /// Draws one frame of the current screen and presents it.
    pub fn draw<D: DisplayBackend>(&mut self, state: &SynthState, display: &mut D) {
        display.clear();
        match state.current_mode() {
            MenuMode::ScaleMenu => views::draw_scale_menu(state, display),
            MenuMode::FrequencyMenu => views::draw_frequency_menu(state, display),
            MenuMode::HarmonicMenu => views::draw_harmonic_menu(state, display),
            MenuMode::ModulationMenu => views::draw_modulation_menu(state, display),
            MenuMode::PanningMenu => views::draw_panning_menu(state, display),
            MenuMode::CvMenu => views::draw_cv_menu(state, display),
            MenuMode::AmplitudeMenu => views::draw_amplitude_bars(state, display),
            MenuMode::WaveformMenu => views::draw_waveform_menu(state, display),
            MenuMode::ParticleDisplay => self.particles.draw(state, display),
            MenuMode::XyDisplay => views::draw_xy_scope(state, &self.table, display),
            MenuMode::RippleDisplay => self.ripples.draw(state, display),
            MenuMode::OscilloscopeDisplay => views::draw_wave_scope(state, &self.table, display),
            MenuMode::DefaultView => views::draw_waveforms(state, &self.table, display),
        }
        display.present();
    }
}

impl core::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

//! Expanding ripple field, seeded from the harmonic amplitudes.

use crate::rng::XorShift32;
use ondas_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH, NUM_HARMONICS, SynthState};
use ondas_platform::DisplayBackend;

const MAX_RIPPLES: usize = 10;

/// Life lost per frame; a ripple lives 20 frames (~2 s at the 10 Hz
/// redraw cadence).
const LIFE_DECAY: f32 = 0.05;

#[derive(Debug, Clone, Copy)]
struct Ripple {
    x: f32,
    y: f32,
    radius: f32,
    speed: f32,
    amplitude: f32,
    life: f32,
}

/// Renderer-owned ripple state, persistent across frames.
///
/// Each ripple's radius grows by its speed every frame while its life
/// decays; on expiry it reseeds at a random position with a speed in
/// [0.1, 0.4] and an amplitude sampled from a random partial.
#[derive(Debug)]
pub(crate) struct RippleField {
    ripples: [Ripple; MAX_RIPPLES],
    rng: XorShift32,
}

impl RippleField {
    /// Scatters the initial ripples at full life and unit amplitude.
    pub fn new(mut rng: XorShift32) -> Self {
        let ripples = core::array::from_fn(|_| Ripple {
            x: rng.below(DISPLAY_WIDTH as u32) as f32,
            y: rng.below(DISPLAY_HEIGHT as u32) as f32,
            radius: 0.0,
            speed: rng.in_range(1, 5) as f32 / 10.0,
            amplitude: 1.0,
            life: 1.0,
        });
        Self { ripples, rng }
    }

    /// Advances and draws one frame.
    pub fn draw<D: DisplayBackend>(&mut self, state: &SynthState, display: &mut D) {
        let Self { ripples, rng } = self;
        for ripple in ripples.iter_mut() {
            ripple.radius += ripple.speed;
            ripple.life -= LIFE_DECAY;

            if ripple.life <= 0.0 {
                ripple.radius = 0.0;
                ripple.x = rng.below(DISPLAY_WIDTH as u32) as f32;
                ripple.y = rng.below(DISPLAY_HEIGHT as u32) as f32;
                ripple.speed = rng.in_range(1, 5) as f32 / 10.0;
                ripple.amplitude = state.amplitude(rng.below(NUM_HARMONICS as u32) as usize);
                ripple.life = 1.0;
            }

            // Monochrome rendition of the fading ring: the panel has no
            // intensity, so a ring is lit while its amplitude-weighted
            // life is still bright.
            if ripple.amplitude * ripple.life >= 0.25 {
                display.circle(ripple.x as i32, ripple.y as i32, ripple.radius as i32, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ondas_platform::testing::BufferDisplay;

    #[test]
    fn fresh_ripples_draw_rings() {
        let state = SynthState::new();
        let mut field = RippleField::new(XorShift32::new(11));
        let mut display = BufferDisplay::new();
        field.draw(&state, &mut display);
        assert!(display.lit_pixels() > 0);
    }

    #[test]
    fn life_decays_and_reseeds() {
        let state = SynthState::new();
        let mut field = RippleField::new(XorShift32::new(12));
        let mut display = BufferDisplay::new();

        // 20 frames exhaust the initial life; every ripple must have
        // reseeded at least once and stayed alive.
        for _ in 0..21 {
            display.clear();
            field.draw(&state, &mut display);
        }
        for ripple in &field.ripples {
            assert!(ripple.life > 0.0);
            assert!(ripple.life <= 1.0);
            assert!((0.1..=0.4).contains(&ripple.speed));
        }
    }

    #[test]
    fn reseeded_amplitude_samples_the_partials() {
        let state = SynthState::new();
        for i in 0..NUM_HARMONICS {
            state.set_amplitude(i, 0.6);
        }
        let mut field = RippleField::new(XorShift32::new(13));
        let mut display = BufferDisplay::new();
        for _ in 0..25 {
            field.draw(&state, &mut display);
        }
        // After a full reseed cycle, every amplitude came from the state.
        for ripple in &field.ripples {
            assert_eq!(ripple.amplitude, 0.6);
        }
    }

    #[test]
    fn radius_grows_with_speed() {
        let state = SynthState::new();
        let mut field = RippleField::new(XorShift32::new(14));
        let speeds: [f32; MAX_RIPPLES] = core::array::from_fn(|i| field.ripples[i].speed);
        let mut display = BufferDisplay::new();

        field.draw(&state, &mut display);
        field.draw(&state, &mut display);
        for (ripple, speed) in field.ripples.iter().zip(speeds.iter()) {
            assert!((ripple.radius - 2.0 * speed).abs() < 1e-6);
        }
    }
}

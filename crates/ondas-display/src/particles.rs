//! Bouncing particle field, velocity-coupled to the harmonic amplitudes.

use crate::rng::XorShift32;
use ondas_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH, NUM_HARMONICS, SynthState};
use ondas_platform::DisplayBackend;

const MAX_PARTICLES: usize = 50;

#[derive(Debug, Clone, Copy, Default)]
struct Particle {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
}

/// Renderer-owned particle state, persistent across frames.
///
/// Particle `i` moves with a velocity scaled by `2 · amp[i mod 7]`, so a
/// loud partial makes "its" particles dart and a silent one freezes them.
/// Particles bounce at the panel edges. None of this feeds back into the
/// audio model.
#[derive(Debug)]
pub(crate) struct ParticleField {
    particles: [Particle; MAX_PARTICLES],
}

impl ParticleField {
    /// Scatters the particles with direction components in {−1, 0, 1}.
    pub fn new(mut rng: XorShift32) -> Self {
        let particles = core::array::from_fn(|_| Particle {
            x: rng.below(DISPLAY_WIDTH as u32) as f32,
            y: rng.below(DISPLAY_HEIGHT as u32) as f32,
            dx: rng.below(3) as f32 - 1.0,
            dy: rng.below(3) as f32 - 1.0,
        });
        Self { particles }
    }

    /// Advances and draws one frame.
    pub fn draw<D: DisplayBackend>(&mut self, state: &SynthState, display: &mut D) {
        for (i, particle) in self.particles.iter_mut().enumerate() {
            let velocity = 2.0 * state.amplitude(i % NUM_HARMONICS);
            particle.x += particle.dx * velocity;
            particle.y += particle.dy * velocity;

            if particle.x < 0.0 || particle.x >= DISPLAY_WIDTH as f32 {
                particle.dx = -particle.dx;
            }
            if particle.y < 0.0 || particle.y >= DISPLAY_HEIGHT as f32 {
                particle.dy = -particle.dy;
            }

            display.pixel(particle.x as i32, particle.y as i32, true);
        }
    }
}

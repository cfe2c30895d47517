//! Glue between the shared state, the engine, and the adapters.

use crate::fsm::ControlFsm;
use crate::{CvSource, Encoder, SampleSink};
use ondas_core::SynthState;
use ondas_synth::AudioEngine;

/// Cadence of the cooperative main loop in milliseconds (~10 Hz): encoder
/// polling, FSM stepping, and redraws all run at this rate.
pub const CONTROL_INTERVAL_MS: u32 = 100;

/// The assembled instrument: shared state plus the two execution contexts.
///
/// [`timer_tick`](Self::timer_tick) is the body of the sample-rate timer
/// interrupt: read CVs, run the engine, hand the frame to the sink. It
/// never blocks, allocates, or fails; a missed deadline simply drops that
/// tick.
///
/// [`control_step`](Self::control_step) is one iteration of the
/// cooperative main loop: poll the encoder and advance the FSM. The
/// caller renders at its own cadence when this returns true, reading
/// [`state`](Self::state); no lock is held across either context's I/O.
///
/// # Example
///
/// ```rust
/// use ondas_platform::testing::{FixedCv, MockSink, ScriptedEncoder};
/// use ondas_platform::Rig;
///
/// let mut rig = Rig::new(MockSink::new(), FixedCv::zero(), ScriptedEncoder::new());
/// rig.timer_tick();
/// let redraw = rig.control_step(100);
/// assert!(!redraw);
/// ```
#[derive(Debug)]
pub struct Rig<S, C, E>
where
    S: SampleSink,
    C: CvSource,
    E: Encoder,
{
    state: SynthState,
    engine: AudioEngine,
    fsm: ControlFsm,
    sink: S,
    cv: C,
    encoder: E,
}

impl<S, C, E> Rig<S, C, E>
where
    S: SampleSink,
    C: CvSource,
    E: Encoder,
{
    /// Wires the adapters to a fresh state and engine.
    pub fn new(sink: S, cv: C, encoder: E) -> Self {
        Self {
            state: SynthState::new(),
            engine: AudioEngine::new(),
            fsm: ControlFsm::new(),
            sink,
            cv,
            encoder,
        }
    }

    /// The shared state, for rendering and inspection.
    pub fn state(&self) -> &SynthState {
        &self.state
    }

    /// The sample sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The encoder adapter.
    pub fn encoder_mut(&mut self) -> &mut E {
        &mut self.encoder
    }

    /// The CV source adapter.
    pub fn cv_mut(&mut self) -> &mut C {
        &mut self.cv
    }

    /// One sample tick: CV read, engine, sink.
    pub fn timer_tick(&mut self) {
        let cv = self.cv.read();
        let frame = self.engine.tick(&self.state, cv);
        self.sink.write(&frame);
    }

    /// One main-loop iteration. Returns true when the screen changed and
    /// should be redrawn.
    pub fn control_step(&mut self, now_ms: u32) -> bool {
        let position = self.encoder.position();
        let pressed = self.encoder.button();
        self.fsm.step(&self.state, position, pressed, now_ms)
    }
}

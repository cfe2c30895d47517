//! Ondas Core - state model for the ondas harmonic instrument
//!
//! This crate holds the shared data model that the sample tick and the
//! control loop both operate on: the harmonic state matrix, scale and
//! waveform selection, CV routing, and the compile-time configuration
//! of the instrument.
//!
//! # Core Components
//!
//! ## Shared State
//!
//! - [`SynthState`] - the single process-wide aggregate: base frequency,
//!   per-partial amplitude and pan, the 7×7 modulation matrix, CV routing,
//!   waveform, scale, and the input/display mode
//! - [`Frame`] / [`CvFrame`] - one tick's output and input
//!
//! Every field the timer context reads is an atomic scalar with relaxed
//! ordering; composite updates (a scale commit, a tag change) run inside a
//! short [`critical_section`]. This lets a timer interrupt and a cooperative
//! main loop share one `&SynthState` without locks in the audio path.
//!
//! ## Tags
//!
//! - [`Waveform`] - base waveform (sine, saw, triangle, pulse)
//! - [`CvMode`] - CV input routing (linear FM, exponential FM, amplitude,
//!   1V/oct pitch)
//! - [`Scale`] - quantization scales with their ratio tables
//! - [`MenuMode`] - menu pages and display views
//!
//! ## Tables
//!
//! - [`SineTable`] - 256 precomputed sine values over one turn, built once
//!   at init and read-only afterwards
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! ondas-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ondas_core::{Scale, SynthState, Waveform};
//!
//! let state = SynthState::new();
//! state.set_amplitude(0, 0.8);
//! state.set_waveform(Waveform::Saw);
//! state.commit_scale(Scale::Pentatonic);
//!
//! assert_eq!(state.amplitude(1), 1.125); // second Pentatonic ratio
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod atomic;
pub mod config;
pub mod frame;
pub mod modes;
pub mod state;
pub mod tables;

// Re-export main types at crate root
pub use atomic::AtomicF32;
pub use config::{
    BASE_FREQUENCIES, DISPLAY_HEIGHT, DISPLAY_WIDTH, NUM_CV_INPUTS, NUM_HARMONICS, NUM_SAMPLES,
    SAMPLE_RATE,
};
pub use frame::{CvFrame, Frame};
pub use modes::{CvMode, MenuMode, Waveform};
pub use state::SynthState;
pub use tables::{Scale, SineTable};

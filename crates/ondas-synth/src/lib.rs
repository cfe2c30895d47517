//! Ondas Synth - the sample tick of the ondas harmonic instrument
//!
//! One [`AudioEngine::tick`] call turns the shared
//! [`SynthState`](ondas_core::SynthState) and one CV reading into one
//! output [`Frame`](ondas_core::Frame): seven partials with per-partial
//! amplitude, pan, cross-modulation, and CV routing, summed into left,
//! right, and stereo channels.
//!
//! The tick runs in a timer interrupt at the sample rate and is written
//! accordingly: no allocation, no blocking, no failure path. State access
//! is relaxed-atomic scalar loads; the only writes are the sample-index
//! advance and the VCA writeback of an Amplitude-routed CV.
//!
//! # Example
//!
//! ```rust
//! use ondas_core::{CvFrame, SynthState};
//! use ondas_synth::AudioEngine;
//!
//! let state = SynthState::new();
//! let engine = AudioEngine::new();
//!
//! let frame = engine.tick(&state, CvFrame::zero());
//! assert_eq!(frame.wave.len(), 7);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;

pub use engine::AudioEngine;

//! Ondas Platform - peripheral contracts and control surface
//!
//! The instrument core touches hardware only through the four adapter
//! traits in this crate. Concrete drivers (the on-chip and I²C DACs, the
//! ADC bank, the detented encoder, the OLED controller) live with the
//! board support code; the core sees pure sinks and sources:
//!
//! - [`SampleSink`] - accepts one output frame per tick
//! - [`CvSource`] - samples the four control-voltage inputs
//! - [`Encoder`] - detented position and push-button level
//! - [`DisplayBackend`] - frame-buffered pixel operations on a 128×64
//!   monochrome panel
//!
//! On top of the contracts sit the pieces that drive them:
//!
//! - [`dac`] - the DAC code conversion laws shared by every sink
//! - [`ControlFsm`] - encoder motion and button events to state edits
//! - [`Rig`] - glue wiring state, engine, FSM, and adapters into the
//!   timer and main-loop execution contexts
//! - [`testing`] - deterministic in-memory adapters for tests and
//!   host-side development
//!
//! Adapter init failures are reported to the boot routine as
//! [`PlatformError`]; after init the core assumes adapters are live and
//! none of the per-tick operations can fail.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! ondas-platform = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod dac;
pub mod error;
pub mod fsm;
pub mod rig;
pub mod testing;

pub use dac::DacCodes;
pub use error::PlatformError;
pub use fsm::ControlFsm;
pub use rig::Rig;

use ondas_core::{CvFrame, Frame};

/// Sink for the per-tick output frame.
///
/// Implementations convert each channel with the laws in [`dac`] and
/// forward the codes to their converters: left/right to the two 8-bit
/// on-chip DACs, stereo and the seven per-partial outputs to 12-bit
/// converters. Addressing is the adapter's concern and fixed at init.
///
/// `write` is called from the timer context and must not block or
/// allocate.
pub trait SampleSink {
    /// Consumes one frame.
    fn write(&mut self, frame: &Frame);
}

/// Source of the four normalized control voltages.
///
/// Readings saturate into [0, 1]; an out-of-range or failed conversion is
/// reported as a clamped value, never as an error — the tick has no
/// failure path.
pub trait CvSource {
    /// Samples all four inputs.
    fn read(&mut self) -> CvFrame;
}

/// The detented rotary encoder with push-button.
///
/// `position` is a monotonic detent count except on device rollover,
/// which the driver is responsible for unwrapping. `button` returns the
/// debounced *level* (true = pressed); press/release timing and the
/// short/long classification belong to [`ControlFsm`], not the adapter.
pub trait Encoder {
    /// Current detent count.
    fn position(&mut self) -> i32;

    /// Current button level, true while pressed.
    fn button(&mut self) -> bool;
}

/// Frame-buffered pixel operations on the monochrome panel.
///
/// Coordinates are in pixels with the origin at the top-left;
/// out-of-range coordinates are ignored. Drawing accumulates in the
/// adapter's buffer until `present` pushes it to the panel.
pub trait DisplayBackend {
    /// Clears the frame buffer.
    fn clear(&mut self);

    /// Sets or clears one pixel.
    fn pixel(&mut self, x: i32, y: i32, on: bool);

    /// Fills an axis-aligned rectangle.
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool);

    /// Draws a circle outline.
    fn circle(&mut self, cx: i32, cy: i32, r: i32, on: bool);

    /// Draws a text string at the given character size.
    fn text(&mut self, x: i32, y: i32, text: &str, size: u8);

    /// Pushes the frame buffer to the panel.
    fn present(&mut self);
}

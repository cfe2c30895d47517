//! Deterministic in-memory adapters.
//!
//! Stand-ins for the hardware drivers, used by the test suites and for
//! host-side bring-up of the control surface. Everything is fixed-size
//! and allocation-free so the doubles run in the same `no_std` envelope
//! as the real adapters.

use crate::dac::DacCodes;
use crate::error::PlatformError;
use crate::{CvSource, DisplayBackend, Encoder, SampleSink};
use libm::sqrtf;
use ondas_core::{CvFrame, DISPLAY_HEIGHT, DISPLAY_WIDTH, Frame};

/// Sink that converts and retains the most recent frame.
#[derive(Debug, Default)]
pub struct MockSink {
    last: Option<DacCodes>,
    writes: usize,
}

impl MockSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codes of the most recently written frame.
    pub fn last(&self) -> Option<&DacCodes> {
        self.last.as_ref()
    }

    /// Number of frames written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SampleSink for MockSink {
    fn write(&mut self, frame: &Frame) {
        self.last = Some(DacCodes::from_frame(frame));
        self.writes += 1;
    }
}

/// CV source returning a settable constant reading.
#[derive(Debug, Default)]
pub struct FixedCv {
    reading: CvFrame,
}

impl FixedCv {
    /// Source reading zero on every input.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Source pinned to `reading`.
    pub fn with(reading: CvFrame) -> Self {
        Self { reading }
    }

    /// Changes the pinned reading.
    pub fn set(&mut self, reading: CvFrame) {
        self.reading = reading;
    }
}

impl CvSource for FixedCv {
    fn read(&mut self) -> CvFrame {
        self.reading
    }
}

/// Encoder whose position and button are driven by the test.
#[derive(Debug, Default)]
pub struct ScriptedEncoder {
    position: i32,
    pressed: bool,
}

impl ScriptedEncoder {
    /// Encoder at detent zero, button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the encoder by `detents` (negative = counter-clockwise).
    pub fn turn(&mut self, detents: i32) {
        self.position += detents;
    }

    /// Presses the button.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Releases the button.
    pub fn release(&mut self) {
        self.pressed = false;
    }
}

impl Encoder for ScriptedEncoder {
    fn position(&mut self) -> i32 {
        self.position
    }

    fn button(&mut self) -> bool {
        self.pressed
    }
}

const BUFFER_PIXELS: usize = (DISPLAY_WIDTH * DISPLAY_HEIGHT) as usize;

/// Frame-buffered display double with a readable pixel buffer.
///
/// Renders into a boolean buffer at the instrument's panel geometry.
/// Text is not rasterized; calls are counted and the last string is
/// retained so tests can assert on labels without a font.
pub struct BufferDisplay {
    width: i32,
    height: i32,
    pixels: [bool; BUFFER_PIXELS],
    text_calls: usize,
    last_text: [u8; 32],
    last_text_len: usize,
    presents: usize,
}

impl BufferDisplay {
    /// A display at the instrument's 128×64 geometry.
    pub fn new() -> Self {
        // The native geometry is always supported.
        match Self::with_size(DISPLAY_WIDTH, DISPLAY_HEIGHT) {
            Ok(display) => display,
            Err(_) => unreachable!(),
        }
    }

    /// A display at a smaller geometry, as a driver would report it.
    ///
    /// Rejects geometries the fixed buffer cannot hold, the same contract
    /// a real panel driver has at bring-up.
    pub fn with_size(width: i32, height: i32) -> Result<Self, PlatformError> {
        if width <= 0 || height <= 0 || width > DISPLAY_WIDTH || height > DISPLAY_HEIGHT {
            return Err(PlatformError::DisplayGeometry { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: [false; BUFFER_PIXELS],
            text_calls: 0,
            last_text: [0; 32],
            last_text_len: 0,
            presents: 0,
        })
    }

    /// Whether the pixel at (x, y) is lit.
    pub fn pixel_at(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Number of lit pixels.
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }

    /// Number of `text` calls since the last clear.
    pub fn text_calls(&self) -> usize {
        self.text_calls
    }

    /// The most recently drawn string (possibly truncated).
    pub fn last_text(&self) -> &str {
        core::str::from_utf8(&self.last_text[..self.last_text_len]).unwrap_or("")
    }

    /// Number of `present` calls.
    pub fn presents(&self) -> usize {
        self.presents
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

impl Default for BufferDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for BufferDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BufferDisplay")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lit_pixels", &self.lit_pixels())
            .field("presents", &self.presents)
            .finish()
    }
}

impl DisplayBackend for BufferDisplay {
    fn clear(&mut self) {
        self.pixels = [false; BUFFER_PIXELS];
        self.text_calls = 0;
        self.last_text_len = 0;
    }

    fn pixel(&mut self, x: i32, y: i32, on: bool) {
        if self.in_bounds(x, y) {
            self.pixels[(y * self.width + x) as usize] = on;
        }
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool) {
        for py in y..y + h {
            for px in x..x + w {
                self.pixel(px, py, on);
            }
        }
    }

    fn circle(&mut self, cx: i32, cy: i32, r: i32, on: bool) {
        if r <= 0 {
            self.pixel(cx, cy, on);
            return;
        }
        for dy in -r..=r {
            for dx in -r..=r {
                let distance = sqrtf((dx * dx + dy * dy) as f32);
                if (distance - r as f32).abs() < 0.5 {
                    self.pixel(cx + dx, cy + dy, on);
                }
            }
        }
    }

    fn text(&mut self, _x: i32, _y: i32, text: &str, _size: u8) {
        self.text_calls += 1;
        let bytes = text.as_bytes();
        let len = bytes.len().min(self.last_text.len());
        self.last_text[..len].copy_from_slice(&bytes[..len]);
        self.last_text_len = len;
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

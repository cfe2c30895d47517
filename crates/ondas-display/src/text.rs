//! Fixed-capacity formatting for label text.
//!
//! The views label with short ASCII strings ("H3: 0.7", "Freq: 440.0")
//! and the render path must not allocate, so labels are formatted into a
//! stack buffer. Overflow truncates silently; every label in this crate
//! fits with room to spare.

use core::fmt::{self, Write};

pub(crate) struct TextBuf {
    buf: [u8; 32],
    len: usize,
}

impl TextBuf {
    /// Formats `args` into a fresh buffer.
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut text = Self {
            buf: [0; 32],
            len: 0,
        };
        // Truncation is the only "failure" and it is absorbed.
        let _ = text.write_fmt(args);
        text
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Write for TextBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = self.buf.len() - self.len;
        let take = s.len().min(space);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

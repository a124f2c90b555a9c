//! One-line color messages for a downstream companion device.

use core::fmt::Write;

use heapless::String;

use crate::color::Rgb;

/// Enough for `COLOR R:255 G:255 B:255\n`
pub const COLOR_LINE_CAPACITY: usize = 32;

/// Formatted companion message
pub type ColorLine = String<COLOR_LINE_CAPACITY>;

/// Serial link to the companion device
pub trait CompanionLink {
    type Error: core::fmt::Debug;

    /// Send one complete line, newline included
    fn send_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Format `COLOR R:<r> G:<g> B:<b>\n`
pub fn format_color_line(color: Rgb) -> ColorLine {
    let mut line = ColorLine::new();
    // Longest possible line is 24 bytes, so this never overflows.
    let _ = writeln!(line, "COLOR R:{} G:{} B:{}", color.r, color.g, color.b);
    line
}

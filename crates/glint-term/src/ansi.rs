// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — that's the job of the `StyleEncoder` and
// the `Renderer`. This module just knows the byte-level encoding of every
// terminal command the renderer needs.
//
// Every attribute has its own on and off sequence; there is no combined
// `1;3;9` form. The encoder emits one sequence per style dimension that
// changed, so each code here corresponds to exactly one dimension.
//
// All cursor positions are 0-indexed in our API and converted to 1-indexed
// for the terminal (ANSI standard uses 1-based coordinates).
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to `OutputBuffer` (backed by a Vec).

use std::io::{self, Write};

use crate::cell::Attr;
use crate::color::Color;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(x, y)` using the CUP (Cursor Position) sequence.
///
/// Our coordinates are 0-indexed; ANSI CUP is 1-indexed.
#[inline]
pub fn cursor_to(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1)
}

/// Move the cursor to the top-left corner (CUP with no parameters).
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H")
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
///
/// This clears **everything**: bold, italic, colors, underline — all of it.
/// The stateful encoder must invalidate its tracked state after calling this.
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// Set the foreground (text) color.
///
/// [`Color::Default`] maps to SGR 39, never to an explicit RGB value.
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    match color {
        Color::Default => w.write_all(b"\x1b[39m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

/// Set the background color.
///
/// Same encoding strategy as [`fg`] with BG-specific SGR codes (49, 48;2).
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    match color {
        Color::Default => w.write_all(b"\x1b[49m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// On/off SGR sequences for each attribute, in emission order.
///
/// Bold and dim share SGR 22 ("normal intensity"), which clears both.
const ATTR_CODES: [(Attr, &[u8], &[u8]); 6] = [
    (Attr::BOLD, b"\x1b[1m", b"\x1b[22m"),
    (Attr::DIM, b"\x1b[2m", b"\x1b[22m"),
    (Attr::ITALIC, b"\x1b[3m", b"\x1b[23m"),
    (Attr::UNDERLINE, b"\x1b[4m", b"\x1b[24m"),
    (Attr::REVERSE, b"\x1b[7m", b"\x1b[27m"),
    (Attr::STRIKETHROUGH, b"\x1b[9m", b"\x1b[29m"),
];

/// Turn a single attribute on.
///
/// `attr` should be exactly one flag. Composite or empty sets write nothing.
pub fn attr_on(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    match ATTR_CODES.iter().find(|(flag, ..)| *flag == attr) {
        Some((_, on, _)) => w.write_all(on),
        None => Ok(()),
    }
}

/// Turn a single attribute off.
///
/// Callers that turn bold or dim off while the other should stay on must
/// re-emit the survivor's on-code afterwards.
pub fn attr_off(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    match ATTR_CODES.iter().find(|(flag, ..)| *flag == attr) {
        Some((_, _, off)) => w.write_all(off),
        None => Ok(()),
    }
}

/// Normal intensity (SGR 22): clears both bold and dim.
#[inline]
pub fn normal_intensity(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[22m")
}

// ─── Synchronized Output ─────────────────────────────────────────────────────

/// Begin synchronized output (DEC Private Mode 2026).
///
/// Tells the terminal to buffer all subsequent output until [`end_sync`].
/// This prevents partial frame updates from causing visible flicker.
#[inline]
pub fn begin_sync(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?2026h")
}

/// End synchronized output — terminal renders the buffered frame.
#[inline]
pub fn end_sync(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?2026l")
}

// ─── Alternate Screen ───────────────────────────────────────────────────────

/// Enter the alternate screen buffer (DEC Private Mode 1049).
#[inline]
pub fn enter_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Exit the alternate screen buffer and restore original content.
#[inline]
pub fn exit_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[test]
    fn cursor_to_origin() {
        assert_eq!(emit(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
    }

    #[test]
    fn cursor_to_is_row_then_column() {
        assert_eq!(emit(|w| cursor_to(w, 5, 5)), "\x1b[6;6H");
        assert_eq!(emit(|w| cursor_to(w, 10, 20)), "\x1b[21;11H");
    }

    #[test]
    fn cursor_to_max_does_not_overflow() {
        assert_eq!(emit(|w| cursor_to(w, u16::MAX, u16::MAX)), "\x1b[65536;65536H");
    }

    #[test]
    fn cursor_home_sequence() {
        assert_eq!(emit(|w| cursor_home(w)), "\x1b[H");
    }

    #[test]
    fn cursor_visibility_sequences() {
        assert_eq!(emit(|w| cursor_hide(w)), "\x1b[?25l");
        assert_eq!(emit(|w| cursor_show(w)), "\x1b[?25h");
    }

    // ── Screen ──────────────────────────────────────────────────────────

    #[test]
    fn clear_screen_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J");
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    // ── Colors ──────────────────────────────────────────────────────────

    #[test]
    fn fg_default() {
        assert_eq!(emit(|w| fg(w, Color::Default)), "\x1b[39m");
    }

    #[test]
    fn fg_rgb() {
        assert_eq!(emit(|w| fg(w, Color::rgb(255, 0, 0))), "\x1b[38;2;255;0;0m");
    }

    #[test]
    fn fg_black_is_explicit() {
        assert_eq!(emit(|w| fg(w, Color::rgb(0, 0, 0))), "\x1b[38;2;0;0;0m");
    }

    #[test]
    fn bg_default() {
        assert_eq!(emit(|w| bg(w, Color::Default)), "\x1b[49m");
    }

    #[test]
    fn bg_rgb() {
        assert_eq!(emit(|w| bg(w, Color::rgb(0, 128, 255))), "\x1b[48;2;0;128;255m");
    }

    // ── Attributes ──────────────────────────────────────────────────────

    #[test]
    fn attr_on_codes() {
        assert_eq!(emit(|w| attr_on(w, Attr::BOLD)), "\x1b[1m");
        assert_eq!(emit(|w| attr_on(w, Attr::DIM)), "\x1b[2m");
        assert_eq!(emit(|w| attr_on(w, Attr::ITALIC)), "\x1b[3m");
        assert_eq!(emit(|w| attr_on(w, Attr::UNDERLINE)), "\x1b[4m");
        assert_eq!(emit(|w| attr_on(w, Attr::REVERSE)), "\x1b[7m");
        assert_eq!(emit(|w| attr_on(w, Attr::STRIKETHROUGH)), "\x1b[9m");
    }

    #[test]
    fn attr_off_codes() {
        assert_eq!(emit(|w| attr_off(w, Attr::ITALIC)), "\x1b[23m");
        assert_eq!(emit(|w| attr_off(w, Attr::UNDERLINE)), "\x1b[24m");
        assert_eq!(emit(|w| attr_off(w, Attr::REVERSE)), "\x1b[27m");
        assert_eq!(emit(|w| attr_off(w, Attr::STRIKETHROUGH)), "\x1b[29m");
    }

    #[test]
    fn bold_and_dim_share_off_code() {
        let bold_off = emit(|w| attr_off(w, Attr::BOLD));
        let dim_off = emit(|w| attr_off(w, Attr::DIM));
        assert_eq!(bold_off, "\x1b[22m");
        assert_eq!(bold_off, dim_off);
        assert_eq!(emit(|w| normal_intensity(w)), bold_off);
    }

    #[test]
    fn composite_attr_writes_nothing() {
        assert_eq!(emit(|w| attr_on(w, Attr::BOLD | Attr::ITALIC)), "");
        assert_eq!(emit(|w| attr_off(w, Attr::empty())), "");
    }

    // ── Modes ───────────────────────────────────────────────────────────

    #[test]
    fn sync_sequences() {
        assert_eq!(emit(|w| begin_sync(w)), "\x1b[?2026h");
        assert_eq!(emit(|w| end_sync(w)), "\x1b[?2026l");
    }

    #[test]
    fn alt_screen_sequences() {
        assert_eq!(emit(|w| enter_alt_screen(w)), "\x1b[?1049h");
        assert_eq!(emit(|w| exit_alt_screen(w)), "\x1b[?1049l");
    }

    #[test]
    fn multiple_sequences_compose() {
        let mut buf = Vec::new();
        cursor_to(&mut buf, 0, 0).unwrap();
        fg(&mut buf, Color::rgb(255, 255, 255)).unwrap();
        reset(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[1;1H\x1b[38;2;255;255;255m\x1b[0m");
    }
}

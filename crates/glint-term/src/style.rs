// SPDX-License-Identifier: MIT
//
// Style encoder — emits only the SGR codes a style transition needs.
//
// The terminal has one "current pen": foreground, background, and the six
// attribute flags. The encoder remembers what it last put on the pen and,
// for the next cell, writes a code for each dimension whose value differs.
// Eight dimensions, tracked independently:
//
//   bold · dim · italic · underline · reverse · strike · fg · bg
//
// There is no "reset then reapply" shortcut mid-pass. Toggling italic off
// costs `ESC[23m`, not `ESC[0m` plus every surviving attribute and color.
//
// State machine:
//
//   NotStarted ──encode──▶ InProgress(style) ──encode──▶ InProgress(style')
//        ▲                                                     │
//        └──────────────────────── finish (ESC[0m) ◀───────────┘
//
// In NotStarted there is nothing to diff against, and nothing is assumed
// about the terminal's pen: a `clear()` or a foreign program may have left
// anything set. The first encode therefore states all eight dimensions:
// SGR 22 followed by the wanted intensities, an on- or off-code for each
// other attribute, then both colors.
//
// Bold and dim share their off-code (SGR 22 clears both). When either turns
// off we emit SGR 22 once, then re-emit the on-code of whichever intensity
// the target still wants, even if it was on before, so the terminal's
// pen matches the target exactly.

use std::io::Write;

use crate::ansi;
use crate::cell::Attr;
use crate::color::Color;

/// Attributes other than bold/dim, in emission order.
const SIMPLE_ATTRS: [Attr; 4] = [
    Attr::ITALIC,
    Attr::UNDERLINE,
    Attr::REVERSE,
    Attr::STRIKETHROUGH,
];

// ─── Style ───────────────────────────────────────────────────────────────────

/// The visual style of a cell, without its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text attributes.
    pub attrs: Attr,
}

impl Style {
    /// Default colors, no attributes — the terminal's post-reset pen.
    pub const RESET: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        attrs: Attr::empty(),
    };
}

// ─── StyleState ──────────────────────────────────────────────────────────────

/// What the encoder knows about the terminal's current pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleState {
    /// Nothing emitted yet in this pass. The next encode is a full emission.
    #[default]
    NotStarted,
    /// The last style written to the terminal.
    InProgress(Style),
}

// ─── StyleEncoder ────────────────────────────────────────────────────────────

/// Stateful converter from cell styles to minimal SGR sequences.
///
/// ```
/// use glint_term::cell::Attr;
/// use glint_term::color::Color;
/// use glint_term::style::{Style, StyleEncoder};
///
/// let mut enc = StyleEncoder::new();
/// let mut out = Vec::new();
/// let bold_red = Style { fg: Color::rgb(255, 0, 0), bg: Color::Default, attrs: Attr::BOLD };
///
/// enc.encode(&mut out, bold_red);
/// // First cell of a pass: every dimension is stated.
/// assert_eq!(
///     out,
///     b"\x1b[22m\x1b[1m\x1b[23m\x1b[24m\x1b[27m\x1b[29m\x1b[38;2;255;0;0m\x1b[49m"
/// );
///
/// out.clear();
/// enc.encode(&mut out, bold_red); // nothing changed
/// assert!(out.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleEncoder {
    state: StyleState,
}

impl StyleEncoder {
    /// Create an encoder in the [`StyleState::NotStarted`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: StyleState::NotStarted,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> StyleState {
        self.state
    }

    /// Forget the tracked pen without emitting anything.
    ///
    /// Use when something outside the encoder has reset the terminal.
    #[inline]
    pub const fn reset(&mut self) {
        self.state = StyleState::NotStarted;
    }

    /// Emit the codes needed to make the terminal's pen equal `target`.
    ///
    /// Returns the number of escape sequences written.
    pub fn encode(&mut self, out: &mut impl Write, target: Style) -> usize {
        let emitted = match self.state {
            StyleState::NotStarted => Self::emit_full(out, target),
            StyleState::InProgress(last) => Self::emit_delta(out, last, target),
        };
        self.state = StyleState::InProgress(target);
        emitted
    }

    /// Close the pass: full reset (`ESC[0m`) and back to `NotStarted`.
    pub fn finish(&mut self, out: &mut impl Write) {
        ansi::reset(out).ok();
        self.state = StyleState::NotStarted;
    }

    fn emit_full(out: &mut impl Write, target: Style) -> usize {
        ansi::normal_intensity(out).ok();
        let mut emitted = 1;
        for flag in [Attr::BOLD, Attr::DIM] {
            if target.attrs.contains(flag) {
                ansi::attr_on(out, flag).ok();
                emitted += 1;
            }
        }
        for flag in SIMPLE_ATTRS {
            if target.attrs.contains(flag) {
                ansi::attr_on(out, flag).ok();
            } else {
                ansi::attr_off(out, flag).ok();
            }
            emitted += 1;
        }
        ansi::fg(out, target.fg).ok();
        ansi::bg(out, target.bg).ok();
        emitted + 2
    }

    fn emit_delta(out: &mut impl Write, last: Style, target: Style) -> usize {
        let mut emitted = Self::emit_intensity(out, last.attrs, target.attrs);

        for flag in SIMPLE_ATTRS {
            let want = target.attrs.contains(flag);
            if want != last.attrs.contains(flag) {
                if want {
                    ansi::attr_on(out, flag).ok();
                } else {
                    ansi::attr_off(out, flag).ok();
                }
                emitted += 1;
            }
        }

        if target.fg != last.fg {
            ansi::fg(out, target.fg).ok();
            emitted += 1;
        }
        if target.bg != last.bg {
            ansi::bg(out, target.bg).ok();
            emitted += 1;
        }
        emitted
    }

    /// Bold and dim, sharing SGR 22 as their off-code.
    fn emit_intensity(out: &mut impl Write, last: Attr, target: Attr) -> usize {
        let mut emitted = 0;
        let turning_off = [Attr::BOLD, Attr::DIM]
            .into_iter()
            .any(|flag| last.contains(flag) && !target.contains(flag));

        if turning_off {
            ansi::normal_intensity(out).ok();
            emitted += 1;
        }
        for flag in [Attr::BOLD, Attr::DIM] {
            // After SGR 22 every wanted intensity must be re-applied.
            let was_on = last.contains(flag) && !turning_off;
            if target.contains(flag) && !was_on {
                ansi::attr_on(out, flag).ok();
                emitted += 1;
            }
        }
        emitted
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

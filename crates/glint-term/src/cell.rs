// SPDX-License-Identifier: MIT
//
// Cell — the atomic unit of terminal rendering.
//
// Every character position on screen is a Cell. It holds a Unicode codepoint,
// foreground and background colors, and six text attributes. The entire
// rendering pipeline exists to produce, diff, and output these.
//
// Size: 16 bytes per cell, Copy-friendly. A 200×50 terminal = 10,000 cells
// = 160 KB per Grid.
//
// Equality is plain structural equality over every field. Two cells that
// would look identical on some terminals (bold+dim vs dim, say) are still
// different cells. The model passes attribute combinations through; it
// never resolves them.
//
// The zero character '\0' is a legal cell value meaning "nothing here".
// It compares unequal to ' ' but renders as a space.

use crate::color::Color;
use crate::style::Style;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// Each flag maps to one SGR on/off pair. Combine with bitwise OR:
    ///
    /// ```
    /// use glint_term::cell::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(style.contains(Attr::ITALIC));
    /// assert!(!style.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 / 22 — increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 2 / 22 — decreased intensity (faint).
        const DIM           = 1 << 1;
        /// SGR 3 / 23 — italic.
        const ITALIC        = 1 << 2;
        /// SGR 4 / 24 — single underline.
        const UNDERLINE     = 1 << 3;
        /// SGR 9 / 29 — crossed-out text.
        const STRIKETHROUGH = 1 << 4;
        /// SGR 7 / 27 — swap foreground and background.
        const REVERSE       = 1 << 5;
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A single terminal cell — the atom of rendering.
///
/// # Layout (16 bytes)
///
/// ```text
/// ┌──────────┬──────────┬──────────┬───────┬─────────┐
/// │ ch: char │ fg: Color│ bg: Color│ attrs │ padding │
/// │ 4 bytes  │ 4 bytes  │ 4 bytes  │  u8   │ 3 bytes │
/// └──────────┴──────────┴──────────┴───────┴─────────┘
/// ```
///
/// # Examples
///
/// ```
/// use glint_term::cell::{Attr, Cell};
/// use glint_term::color::Color;
///
/// let a = Cell::new('R').with_fg(Color::rgb(255, 0, 0));
/// let b = a.with_attrs(Attr::BOLD);
/// assert_ne!(a, b); // any single field makes cells differ
/// assert_eq!(Cell::default(), Cell::EMPTY);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character to display. `'\0'` renders as a space.
    pub ch: char,

    /// Foreground (text) color.
    pub fg: Color,

    /// Background color.
    pub bg: Color,

    /// Text attributes (bold, dim, italic, underline, strike, reverse).
    pub attrs: Attr,
}

/// The zero character: renders as a blank.
const NUL: char = '\0';

impl Cell {
    /// An empty cell: space character, default colors, no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Color::Default,
        bg: Color::Default,
        attrs: Attr::empty(),
    };

    /// Create a cell with a character and default styling.
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attr::empty(),
        }
    }

    /// Create a cell with full styling.
    #[inline]
    #[must_use]
    pub const fn styled(ch: char, fg: Color, bg: Color, attrs: Attr) -> Self {
        Self { ch, fg, bg, attrs }
    }

    // ─── Queries ──────────────────────────────────────────────────────────

    /// Whether this cell equals [`Cell::EMPTY`].
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Whether this cell has any text attributes set.
    #[inline]
    #[must_use]
    pub const fn has_attrs(self) -> bool {
        !self.attrs.is_empty()
    }

    /// The character as it should appear on screen.
    ///
    /// The zero character becomes a space; everything else passes through.
    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        if self.ch == NUL { ' ' } else { self.ch }
    }

    /// The cell's style (colors + attributes), without the character.
    #[inline]
    #[must_use]
    pub const fn style(self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            attrs: self.attrs,
        }
    }

    // ─── Builders ─────────────────────────────────────────────────────────

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    /// Set text attributes.
    #[inline]
    #[must_use]
    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self { attrs, ..self }
    }

    /// Replace the character, keeping the style.
    #[inline]
    #[must_use]
    pub const fn with_char(self, ch: char) -> Self {
        Self { ch, ..self }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({:?}", self.ch)?;
        if !self.fg.is_default() {
            write!(f, ", fg={:?}", self.fg)?;
        }
        if !self.bg.is_default() {
            write!(f, ", bg={:?}", self.bg)?;
        }
        if !self.attrs.is_empty() {
            write!(f, ", {:?}", self.attrs)?;
        }
        write!(f, ")")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

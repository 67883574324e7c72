// SPDX-License-Identifier: MIT
//
// Color — what a cell's foreground or background resolves to.
//
// Two states only: the terminal's own default color, or an explicit 24-bit
// RGB triple. `Default` is NOT black. A cell with `Default` fg follows the
// user's terminal theme; a cell with `Rgb(0, 0, 0)` is painted black no
// matter what the theme says. The ANSI layer maps them to different codes
// (SGR 39/49 versus SGR 38;2 / 48;2).

/// A cell color: terminal default or explicit `TrueColor` RGB.
///
/// `Copy`, 4 bytes, compared by structural equality.
///
/// ```
/// use glint_term::color::Color;
///
/// assert_ne!(Color::Default, Color::rgb(0, 0, 0));
/// assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default color (inherits from terminal settings).
    #[default]
    Default,

    /// 24-bit `TrueColor`.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Explicit RGB color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Whether this is the terminal default color.
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// The RGB components, or `None` for [`Color::Default`].
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Rgb(r, g, b) => Some((r, g, b)),
            Self::Default => None,
        }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    ///
    /// Returns `None` for anything else. There is no shorthand form.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(r, g, b)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_default_variant() {
        assert_eq!(Color::default(), Color::Default);
        assert!(Color::default().is_default());
    }

    #[test]
    fn default_is_not_black() {
        assert_ne!(Color::Default, Color::rgb(0, 0, 0));
        assert!(!Color::rgb(0, 0, 0).is_default());
    }

    #[test]
    fn rgb_components() {
        assert_eq!(Color::rgb(1, 2, 3).to_rgb(), Some((1, 2, 3)));
        assert_eq!(Color::Default.to_rgb(), None);
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Color::from((10, 20, 30)), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn color_is_4_bytes() {
        assert_eq!(std::mem::size_of::<Color>(), 4);
    }

    // ── Hex parsing ─────────────────────────────────────────────────────

    #[test]
    fn hex_with_hash() {
        assert_eq!(Color::from_hex("#1e1e2e"), Some(Color::rgb(0x1e, 0x1e, 0x2e)));
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(Color::from_hex("FF0000"), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn hex_rejects_short_form() {
        assert_eq!(Color::from_hex("#fff"), None);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#ff00001"), None);
    }

    #[test]
    fn hex_rejects_multibyte_without_panicking() {
        assert_eq!(Color::from_hex("#ééé"), None);
    }
}

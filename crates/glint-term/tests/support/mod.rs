// SPDX-License-Identifier: MIT
//
// A tiny virtual terminal for integration tests.
//
// It understands exactly the vocabulary the renderer emits: cursor
// position, cursor home, clear screen, SGR (reset, the six attributes,
// truecolor and default colors), CR, LF, and the private modes (which it
// ignores). Printing a character writes it with the current pen and
// advances the cursor. At the right edge the cursor stays put with a
// pending wrap, as xterm does: the next printed character lands at column
// 0 of the next row, while CR, LF, or a cursor move cancel the wrap.
//
// Feeding a renderer's output through this model and comparing the screen
// with the requested grid checks the whole pipeline end to end.

#![allow(dead_code)]

use glint_term::cell::{Attr, Cell};
use glint_term::color::Color;
use glint_term::grid::Grid;

#[derive(Debug)]
pub struct VirtualScreen {
    pub screen: Grid,
    pub x: u16,
    pub y: u16,
    pending_wrap: bool,
    pen: Cell,
}

impl VirtualScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Grid::new(width, height),
            x: 0,
            y: 0,
            pending_wrap: false,
            pen: Cell::EMPTY,
        }
    }

    /// Interpret a byte stream.
    ///
    /// Panics on anything outside the known vocabulary, which is exactly
    /// what a test wants.
    pub fn feed(&mut self, bytes: &[u8]) {
        let text = std::str::from_utf8(bytes).expect("renderer output is UTF-8");
        let mut chars = text.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '\x1b' => {
                    assert_eq!(chars.next(), Some('['), "only CSI sequences expected");
                    let mut params = String::new();
                    let final_byte = loop {
                        let c = chars.next().expect("unterminated CSI");
                        if c.is_ascii_alphabetic() {
                            break c;
                        }
                        params.push(c);
                    };
                    self.csi(&params, final_byte);
                }
                '\r' => {
                    self.x = 0;
                    self.pending_wrap = false;
                }
                '\n' => {
                    self.y += 1;
                    self.pending_wrap = false;
                }
                c => self.print(c),
            }
        }
    }

    /// The screen with `'\0'` shown as the space it renders as.
    pub fn expected(grid: &Grid) -> Grid {
        let mut shown = grid.clone();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cell = grid.get(x, y);
                shown.set(x, y, cell.with_char(cell.character()));
            }
        }
        shown
    }

    fn print(&mut self, ch: char) {
        if self.pending_wrap {
            self.x = 0;
            self.y += 1;
            self.pending_wrap = false;
        }
        let cell = self.pen.with_char(ch);
        assert!(
            self.screen.set(self.x, self.y, cell),
            "print at ({}, {}) is off screen",
            self.x,
            self.y
        );
        if self.x + 1 >= self.screen.width() {
            self.pending_wrap = true;
        } else {
            self.x += 1;
        }
    }

    fn csi(&mut self, params: &str, final_byte: char) {
        if params.starts_with('?') {
            return; // private modes: sync, cursor visibility, alt screen
        }
        match final_byte {
            'H' if params.is_empty() => {
                self.x = 0;
                self.y = 0;
                self.pending_wrap = false;
            }
            'H' => {
                let (row, col) = params.split_once(';').expect("row;col");
                self.y = row.parse::<u16>().expect("row") - 1;
                self.x = col.parse::<u16>().expect("col") - 1;
                self.pending_wrap = false;
            }
            'J' => {
                assert_eq!(params, "2");
                self.screen.fill(Cell::EMPTY);
            }
            'm' => self.sgr(params),
            other => panic!("unexpected CSI final byte {other:?}"),
        }
    }

    fn sgr(&mut self, params: &str) {
        let codes: Vec<u8> = params.split(';').map(|p| p.parse().expect("SGR code")).collect();
        let mut i = 0;
        while i < codes.len() {
            match codes[i] {
                0 => self.pen = Cell::EMPTY,
                1 => self.pen.attrs.insert(Attr::BOLD),
                2 => self.pen.attrs.insert(Attr::DIM),
                3 => self.pen.attrs.insert(Attr::ITALIC),
                4 => self.pen.attrs.insert(Attr::UNDERLINE),
                7 => self.pen.attrs.insert(Attr::REVERSE),
                9 => self.pen.attrs.insert(Attr::STRIKETHROUGH),
                22 => self.pen.attrs.remove(Attr::BOLD | Attr::DIM),
                23 => self.pen.attrs.remove(Attr::ITALIC),
                24 => self.pen.attrs.remove(Attr::UNDERLINE),
                27 => self.pen.attrs.remove(Attr::REVERSE),
                29 => self.pen.attrs.remove(Attr::STRIKETHROUGH),
                39 => self.pen.fg = Color::Default,
                49 => self.pen.bg = Color::Default,
                code @ (38 | 48) => {
                    assert_eq!(codes[i + 1], 2, "truecolor only");
                    let color = Color::rgb(codes[i + 2], codes[i + 3], codes[i + 4]);
                    if code == 38 {
                        self.pen.fg = color;
                    } else {
                        self.pen.bg = color;
                    }
                    i += 4;
                }
                other => panic!("unexpected SGR code {other}"),
            }
            i += 1;
        }
    }
}

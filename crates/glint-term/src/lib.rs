// SPDX-License-Identifier: MIT
//
// glint-term — differential terminal screen renderer.
//
// The caller paints a Grid of styled cells; the Renderer remembers what is
// on screen, diffs the new grid against it, and writes only the cells that
// changed. Cursor moves are skipped when the cursor is already in place and
// style codes are emitted per dimension, so a frame that changes one cell
// costs one cell's worth of bytes.
//
// No TUI framework underneath. Output is raw ANSI written into one buffer
// and flushed to any `io::Write` in a single call.

pub mod ansi;
pub mod cell;
pub mod color;
pub mod diff;
pub mod grid;
pub mod output;
pub mod renderer;
pub mod style;

// SPDX-License-Identifier: MIT
//
// Renderer — the stateful rendering session.
//
// Instead of redrawing the entire screen every frame, the Renderer keeps the
// grid it last displayed, diffs each requested grid against it, and emits
// escape sequences only for cells that actually changed.
//
// The pipeline per frame:
//
//   1. Caller paints a Grid (the "requested" frame).
//   2. Renderer.render() diffs it against the retained grid.
//   3. For each change, in row-major order:
//        - cursor move, unless the cursor already sits there
//        - StyleEncoder emits only the style dimensions that changed
//        - the character
//   4. A full SGR reset closes the pass, so no style leaks past the frame.
//   5. All output is appended to an OutputBuffer. It accumulates across
//      clear(), render() and render_full() until flush() / flush_to() hands
//      it to the sink in one write.
//   6. The requested grid becomes the retained grid.
//
// Cursor tracking: after printing at (x, y) the terminal cursor sits at
// (x + 1, y), or at column 0 of the next row once x reaches the width
// (autowrap). A change landing exactly there needs no move. Because the
// diff is row-major, the cursor never has to travel backwards within a pass.
//
// Nothing in here fails. Size mismatches become a resize and a full redraw
// of every non-empty cell; zero-sized grids produce no cell output. The
// only fallible step is flushing to the sink, which is the sink's problem.

use std::io::{self, Write};

use crate::ansi;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::output::OutputBuffer;
use crate::style::StyleEncoder;

// ─── RenderOptions ───────────────────────────────────────────────────────────

/// Output options for a [`Renderer`].
///
/// Both default to off, so the default output is exactly the cell codes and
/// the closing reset. Options wrap a pass; they never change which cells
/// are emitted, and a pass with nothing to draw stays empty.
///
/// | Option                | Wraps a pass in           | Default |
/// |-----------------------|---------------------------|---------|
/// | `synchronized_output` | `ESC[?2026h … ESC[?2026l` | false   |
/// | `hide_cursor`         | `ESC[?25l … ESC[?25h`     | false   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Bracket each pass with DEC 2026 synchronized-output markers.
    pub synchronized_output: bool,
    /// Hide the cursor while a pass is drawn, show it afterwards.
    pub hide_cursor: bool,
}

impl RenderOptions {
    /// Set [`synchronized_output`](Self::synchronized_output).
    #[inline]
    #[must_use]
    pub const fn with_synchronized_output(self, on: bool) -> Self {
        Self {
            synchronized_output: on,
            ..self
        }
    }

    /// Set [`hide_cursor`](Self::hide_cursor).
    #[inline]
    #[must_use]
    pub const fn with_hide_cursor(self, on: bool) -> Self {
        Self {
            hide_cursor: on,
            ..self
        }
    }
}

// ─── RenderStats ─────────────────────────────────────────────────────────────

/// Statistics from a render pass, for profiling and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Cells emitted to the output.
    pub cells_rendered: usize,
    /// Cells that matched the retained grid and were skipped.
    pub cells_skipped: usize,
    /// Cursor-position sequences emitted.
    pub cursor_moves: usize,
    /// Total bytes of output generated.
    pub bytes_written: usize,
}

impl RenderStats {
    /// Total cells processed (rendered + skipped).
    #[inline]
    #[must_use]
    pub const fn total_cells(&self) -> usize {
        self.cells_rendered + self.cells_skipped
    }
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Where the renderer believes the terminal cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Unknown: the next write must position the cursor explicitly.
    #[default]
    Unknown,
    /// The cell the next printed character will land on.
    At {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },
}

impl Cursor {
    /// Position after printing one character at `(x, y)` on a grid `width`
    /// columns wide, wrapping to the next row at the right edge.
    #[inline]
    const fn after(x: u16, y: u16, width: u16) -> Self {
        if x + 1 < width {
            Self::At { x: x + 1, y }
        } else {
            Self::At {
                x: 0,
                y: y.saturating_add(1),
            }
        }
    }

    #[inline]
    fn is_at(self, x: u16, y: u16) -> bool {
        self == Self::At { x, y }
    }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

/// Differential renderer: a session that owns the currently displayed grid.
///
/// One `Renderer` per terminal. Every mutating call takes `&mut self`, so the
/// borrow checker enforces the single-writer contract; share the session
/// behind your own lock if several threads must render.
///
/// # Usage
///
/// ```
/// use glint_term::cell::Cell;
/// use glint_term::grid::Grid;
/// use glint_term::renderer::Renderer;
///
/// let mut renderer = Renderer::new(10, 10);
/// let mut frame = Grid::new(10, 10);
/// frame.set(5, 5, Cell::new('X'));
///
/// let stats = renderer.render(&frame);
/// assert_eq!(stats.cells_rendered, 1);
/// assert_eq!(
///     renderer.output_bytes(),
///     b"\x1b[6;6H\x1b[22m\x1b[23m\x1b[24m\x1b[27m\x1b[29m\x1b[39m\x1b[49mX\x1b[0m"
/// );
///
/// let mut sink = Vec::new();
/// renderer.flush_to(&mut sink).unwrap();
///
/// // Same frame again: nothing to do.
/// renderer.render(&frame);
/// assert!(renderer.output_bytes().is_empty());
/// ```
#[derive(Debug)]
pub struct Renderer {
    retained: Grid,
    cursor: Cursor,
    style: StyleEncoder,
    output: OutputBuffer,
    options: RenderOptions,
}

impl Renderer {
    /// Create a session for a `width × height` screen with default options.
    ///
    /// The retained grid starts blank and the cursor position is unknown, so
    /// the first write always positions the cursor.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_options(width, height, RenderOptions::default())
    }

    /// Create a session with explicit [`RenderOptions`].
    #[must_use]
    pub fn with_options(width: u16, height: u16, options: RenderOptions) -> Self {
        Self {
            retained: Grid::new(width, height),
            cursor: Cursor::Unknown,
            style: StyleEncoder::new(),
            output: OutputBuffer::new(),
            options,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Width of the retained grid.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.retained.width()
    }

    /// Height of the retained grid.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.retained.height()
    }

    /// The grid the renderer believes is on screen.
    #[inline]
    #[must_use]
    pub const fn retained(&self) -> &Grid {
        &self.retained
    }

    /// The tracked cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current options.
    #[inline]
    #[must_use]
    pub const fn options(&self) -> RenderOptions {
        self.options
    }

    /// Replace the options. Takes effect on the next pass.
    #[inline]
    pub const fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Emit the changes that turn the retained grid into `requested`.
    ///
    /// If `requested` has different dimensions, this first behaves like
    /// [`resize`](Self::resize): the retained grid becomes a blank canvas of
    /// the new size, so every non-empty cell of `requested` is emitted.
    ///
    /// If nothing changed, the output is empty and no state is touched.
    /// Otherwise `requested` becomes the retained grid.
    ///
    /// The generated bytes are appended to the pending output; read them
    /// with [`output_bytes`](Self::output_bytes) or send them with
    /// [`flush`](Self::flush) / [`flush_to`](Self::flush_to).
    pub fn render(&mut self, requested: &Grid) -> RenderStats {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "render",
            width = requested.width(),
            height = requested.height()
        )
        .entered();

        let start = self.output.len();

        if requested.size() != self.retained.size() {
            self.resize(requested.width(), requested.height());
        }

        let diff = self.retained.diff(requested);
        let mut stats = RenderStats {
            cells_skipped: requested.len() - diff.len(),
            ..RenderStats::default()
        };
        if diff.is_empty() {
            return stats;
        }

        self.begin_pass();
        self.style.reset();
        let width = requested.width();

        for change in &diff {
            if !self.cursor.is_at(change.x, change.y) {
                ansi::cursor_to(&mut self.output, change.x, change.y).ok();
                stats.cursor_moves += 1;
            }
            self.style.encode(&mut self.output, change.cell.style());
            self.output.write_char(change.cell.character());
            self.cursor = Cursor::after(change.x, change.y, width);
            stats.cells_rendered += 1;
        }

        self.style.finish(&mut self.output);
        self.end_pass();

        self.retained.copy_from(requested);
        stats.bytes_written = self.output.len() - start;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            cells = stats.cells_rendered,
            moves = stats.cursor_moves,
            bytes = stats.bytes_written,
            "render pass"
        );

        stats
    }

    /// Emit every cell of `grid`, ignoring what is retained.
    ///
    /// Starts at the top-left (`ESC[1;1H`), writes rows separated by
    /// `\r\n` (none after the last row), keeps style codes minimal across
    /// the whole pass, and ends with a full reset. `grid` becomes the
    /// retained grid and the cursor is tracked from the bottom-right cell.
    pub fn render_full(&mut self, grid: &Grid) -> RenderStats {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("render_full", width = grid.width(), height = grid.height())
                .entered();

        let start = self.output.len();
        self.begin_pass();
        self.style.reset();

        ansi::cursor_to(&mut self.output, 0, 0).ok();
        let mut stats = RenderStats {
            cursor_moves: 1,
            ..RenderStats::default()
        };

        for y in 0..grid.height() {
            if y > 0 {
                self.output.write_all(b"\r\n").ok();
            }
            if let Some(row) = grid.row(y) {
                for cell in row {
                    self.style.encode(&mut self.output, cell.style());
                    self.output.write_char(cell.character());
                }
                stats.cells_rendered += row.len();
            }
        }

        self.style.finish(&mut self.output);
        self.end_pass();

        self.retained.copy_from(grid);
        self.cursor = if grid.is_empty() {
            Cursor::Unknown
        } else {
            Cursor::after(grid.width() - 1, grid.height() - 1, grid.width())
        };
        stats.bytes_written = self.output.len() - start;
        stats
    }

    /// Forget what is on screen and adopt a new size.
    ///
    /// The retained grid becomes a blank `width × height` grid, the cursor
    /// becomes unknown, and the style state restarts. Emits nothing; the
    /// next [`render`](Self::render) draws every non-empty cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from_width = self.retained.width(),
            from_height = self.retained.height(),
            width,
            height,
            "renderer resized"
        );

        self.retained = Grid::new(width, height);
        self.cursor = Cursor::Unknown;
        self.style.reset();
    }

    /// Clear the physical screen and the retained grid.
    ///
    /// Appends `ESC[2J` then `ESC[H` to the pending output. The cursor is
    /// tracked at `(0, 0)`. The next [`render`](Self::render) emits every
    /// non-empty cell again, restating its full style.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(width = self.width(), height = self.height(), "renderer cleared");

        ansi::clear_screen(&mut self.output).ok();
        ansi::cursor_home(&mut self.output).ok();

        self.retained.fill(Cell::EMPTY);
        self.cursor = Cursor::At { x: 0, y: 0 };
        self.style.reset();
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Pending output: everything `render`, `render_full` and `clear`
    /// produced since the last successful flush.
    #[must_use]
    pub fn output_bytes(&self) -> &[u8] {
        self.output.as_bytes()
    }

    /// Write pending output to stdout and clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush_stdout()
    }

    /// Write pending output to `w` and clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails. The pending bytes are kept.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.output.flush_to(w)
    }

    // ─── Helpers ─────────────────────────────────────────────────────────

    fn begin_pass(&mut self) {
        if self.options.synchronized_output {
            ansi::begin_sync(&mut self.output).ok();
        }
        if self.options.hide_cursor {
            ansi::cursor_hide(&mut self.output).ok();
        }
    }

    fn end_pass(&mut self) {
        if self.options.hide_cursor {
            ansi::cursor_show(&mut self.output).ok();
        }
        if self.options.synchronized_output {
            ansi::end_sync(&mut self.output).ok();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

// SPDX-License-Identifier: MIT
//
// Grid — the 2D cell array a frame is painted into.
//
// Every character position on screen is a cell in this grid. Callers paint
// a fresh Grid (or a clone of the last one) per frame, hand it to the
// Renderer, and the Renderer diffs it against the Grid it displayed last.
//
// Design:
//
//   - Flat `Vec<Cell>` with row-major indexing for cache efficiency.
//     A row's cells are contiguous in memory, so left-to-right iteration
//     (which the diff does) is a linear scan.
//
//   - Clipping, never failing. Reads outside the grid return `Cell::EMPTY`;
//     writes outside the grid are dropped. Painting past an edge is a normal
//     thing for a caller to do, not a bug to report.
//
//   - Zero-sized grids are legal. They hold no cells and every write is
//     dropped.
//
// Memory:
//
//   200×50 terminal = 10,000 cells × 16 bytes = 160 KB per grid.

use crate::cell::Cell;
use crate::diff::GridDiff;

/// A 2D grid of terminal cells.
///
/// Flat `Vec<Cell>` with row-major indexing: `index = y * width + x`.
/// Invariant: `cells.len() == width * height`.
///
/// # Examples
///
/// ```
/// use glint_term::cell::Cell;
/// use glint_term::grid::Grid;
///
/// let mut grid = Grid::new(80, 24);
/// assert_eq!(grid.width(), 80);
/// assert_eq!(grid.height(), 24);
///
/// grid.set(5, 3, Cell::new('X'));
/// assert_eq!(grid.get(5, 3).ch, 'X');
///
/// // Out of range: silently ignored / empty.
/// assert!(!grid.set(80, 0, Cell::new('!')));
/// assert_eq!(grid.get(1000, 1000), Cell::EMPTY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    // ─── Construction ────────────────────────────────────────────────────

    /// Create a grid filled with [`Cell::EMPTY`].
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Cell::EMPTY)
    }

    /// Create a grid with every position set to `cell`.
    #[must_use]
    pub fn filled(width: u16, height: u16, cell: Cell) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Grid width in columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Total number of cells (`width × height`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` is within the grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Convert `(x, y)` to a flat index. Caller checks bounds.
    #[inline]
    const fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// The cell at `(x, y)`, or [`Cell::EMPTY`] if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[self.index(x, y)]
        } else {
            Cell::EMPTY
        }
    }

    /// A mutable cell reference, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// The raw row-major cell slice.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A single row as a slice. Returns `None` if `y` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y < self.height {
            let start = self.index(0, y);
            Some(&self.cells[start..start + usize::from(self.width)])
        } else {
            None
        }
    }

    /// Iterate cells with their `(x, y)` coordinates, row-major.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        let w = usize::from(self.width).max(1); // zero width means no cells at all
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            // Safe truncation: x < width (u16) and y < height (u16).
            ((i % w) as u16, (i / w) as u16, cell)
        })
    }

    // ─── Writing ─────────────────────────────────────────────────────────

    /// Write a cell. Out-of-bounds writes are dropped.
    ///
    /// Returns `true` if the position was in bounds. The return value is
    /// informational; ignoring it is always fine.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Overwrite every position with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the rectangle at `(x, y)` of size `width × height` with `cell`.
    ///
    /// The rectangle is clipped to the grid; fully outside is a no-op.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, cell: Cell) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        if x >= x2 || y >= y2 {
            return;
        }
        for row in y..y2 {
            let start = self.index(x, row);
            let end = self.index(x2, row);
            self.cells[start..end].fill(cell);
        }
    }

    /// Place `text` on row `y` starting at column `x`, one `char` per cell.
    ///
    /// Each cell copies `template`'s colors and attributes. Text running
    /// past the right edge is clipped. Returns the number of cells written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, template: Cell) -> u16 {
        if y >= self.height || x >= self.width {
            return 0;
        }
        let mut written = 0;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            let idx = self.index(col, y);
            self.cells[idx] = template.with_char(ch);
            written += 1;
        }
        written
    }

    /// Copy all cells from `other`. Resizes if dimensions differ.
    ///
    /// Reuses this grid's allocation when sizes match.
    pub fn copy_from(&mut self, other: &Self) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }

    // ─── Diff ────────────────────────────────────────────────────────────

    /// Cells of `other` that differ from `self`, row-major.
    ///
    /// Only the overlapping rectangle (`min` width × `min` height) is
    /// compared. See [`GridDiff::compute`].
    #[must_use]
    pub fn diff(&self, other: &Self) -> GridDiff {
        GridDiff::compute(self, other)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

// SPDX-License-Identifier: MIT
//
// Grid diff — which cells changed between two frames.
//
// The diff walks the rectangle both grids share, row by row, left to right,
// and records every position whose cell differs. Positions outside the
// shared rectangle are never reported, even when one grid is larger: a
// size change is the Renderer's business (it resets and redraws), not the
// diff's.
//
// The output order — ascending row, then ascending column — is part of the
// contract. The Renderer relies on it to skip cursor moves for runs of
// adjacent changes and to never move the cursor backwards.
//
// Cost: one linear scan over the shared rectangle, one 16-byte comparison
// per cell. When both grids have the same width, an unchanged row is
// skipped with a single slice comparison.

use crate::cell::Cell;
use crate::grid::Grid;

// ─── Change ──────────────────────────────────────────────────────────────────

/// One changed position and the cell it should now show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// The new cell.
    pub cell: Cell,
}

// ─── GridDiff ────────────────────────────────────────────────────────────────

/// Ordered list of changes from one grid to another.
///
/// ```
/// use glint_term::cell::Cell;
/// use glint_term::grid::Grid;
///
/// let old = Grid::new(80, 24);
/// let mut new = old.clone();
/// new.set(6, 5, Cell::new('Y'));
/// new.set(5, 5, Cell::new('X'));
///
/// let diff = old.diff(&new);
/// assert_eq!(diff.len(), 2);
/// let xs: Vec<u16> = diff.iter().map(|c| c.x).collect();
/// assert_eq!(xs, [5, 6]); // row-major order, regardless of write order
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridDiff {
    changes: Vec<Change>,
}

impl GridDiff {
    /// Compute the changes that turn `old` into `new`.
    ///
    /// Compares only the overlapping `min(width) × min(height)` rectangle.
    /// Each [`Change`] carries the cell from `new`.
    #[must_use]
    pub fn compute(old: &Grid, new: &Grid) -> Self {
        let width = old.width().min(new.width());
        let height = old.height().min(new.height());

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("grid_diff", width, height).entered();

        let mut changes = Vec::new();
        let w = usize::from(width);

        for y in 0..height {
            let (Some(old_row), Some(new_row)) = (old.row(y), new.row(y)) else {
                break;
            };
            let old_row = &old_row[..w];
            let new_row = &new_row[..w];

            // Row-skip: a whole identical row costs one slice comparison.
            if old_row == new_row {
                continue;
            }

            for (x, (a, b)) in (0..width).zip(old_row.iter().zip(new_row)) {
                if a != b {
                    changes.push(Change { x, y, cell: *b });
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(changes = changes.len(), "diff computed");

        Self { changes }
    }

    /// Number of changed cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether nothing changed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The changes as a slice, row-major.
    #[inline]
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Iterate the changes, row-major.
    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }
}

impl IntoIterator for GridDiff {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a GridDiff {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

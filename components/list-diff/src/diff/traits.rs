//! Edit-graph types and the callback trait.
//!
//! This module provides the records shared by every layer of the engine,
//! from the middle-snake search up to the executor, and the seam through
//! which callers receive the edit script.

use serde::{Deserialize, Serialize};

/// A point `(row, col)` in the edit graph.
///
/// `row` indexes the old sequence and `col` indexes the new one, so a point
/// sits between elements: `(0, 0)` is before both sequences and
/// `(old.len(), new.len())` is after both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Position in the old sequence.
    pub row: usize,
    /// Position in the new sequence.
    pub col: usize,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the diagonal `row - col` this point lies on.
    #[must_use]
    pub const fn diagonal(&self) -> isize {
        self.row as isize - self.col as isize
    }
}

/// A run of matched elements between two edit-graph points.
///
/// A snake either covers a diagonal run (`end.row - start.row ==
/// end.col - start.col`) or is a zero-length placeholder marking a point the
/// edit path passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snake {
    /// First point of the run.
    pub start: Point,
    /// Last point of the run.
    pub end: Point,
}

impl Snake {
    /// Creates a snake from its two end points.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Creates a zero-length snake sitting on `point`.
    #[must_use]
    pub const fn at(point: Point) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Returns the number of matched elements in the run.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.row - self.start.row
    }

    /// Returns true if the run matches no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end.row == self.start.row
    }

    /// Returns true if this is a zero-length placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.start.row == self.end.row && self.start.col == self.end.col
    }

    /// Shifts both end points by the given row and column offsets.
    #[must_use]
    pub(crate) const fn offset(self, rows: usize, cols: usize) -> Self {
        Self {
            start: Point::new(self.start.row + rows, self.start.col + cols),
            end: Point::new(self.end.row + rows, self.end.col + cols),
        }
    }
}

/// Result of the middle-snake search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleSnake {
    /// Length of the shortest edit script between the two sequences.
    pub edit_distance: usize,
    /// A maximal run that some shortest edit script passes through.
    pub snake: Snake,
}

/// Receiver of the edit script produced by the executor.
///
/// Calls arrive synchronously in queue order. Coordinates are edit-graph
/// points, so an insertion reaching `(old_row, new_col)` adds
/// `new[new_col - 1]` and a deletion reaching row `old_row` removes
/// `old[old_row - 1]`.
pub trait EditHandler {
    /// An element of the new sequence was inserted; the path now stands at
    /// `(old_row, new_col)`.
    fn insert(&mut self, old_row: usize, new_col: usize);

    /// An element of the old sequence was deleted; the path now stands on
    /// row `old_row`.
    fn delete(&mut self, old_row: usize);

    /// `old[from_old]` is kept and lands at `new[to_new]`.
    fn move_item(&mut self, from_old: usize, to_new: usize);
}

impl<H: EditHandler + ?Sized> EditHandler for &mut H {
    fn insert(&mut self, old_row: usize, new_col: usize) {
        (**self).insert(old_row, new_col);
    }

    fn delete(&mut self, old_row: usize) {
        (**self).delete(old_row);
    }

    fn move_item(&mut self, from_old: usize, to_new: usize) {
        (**self).move_item(from_old, to_new);
    }
}

//! Replays an [`EditQueue`] as callbacks.
//!
//! Every matched element of a record becomes a `move_item`, and the single
//! edit separating a record from the next becomes an `insert` (same row) or a
//! `delete` (row advanced).

use serde::{Deserialize, Serialize};

use super::queue::EditQueue;
use super::traits::EditHandler;

/// One callback emitted by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    /// `new[new_col - 1]` was inserted; the path stands at `(old_row, new_col)`.
    Insert {
        /// Row of the edit-graph point after the insertion.
        old_row: usize,
        /// Column of the edit-graph point after the insertion.
        new_col: usize,
    },
    /// `old[old_row - 1]` was deleted.
    Delete {
        /// Row of the edit-graph point after the deletion.
        old_row: usize,
    },
    /// `old[from_old]` is kept as `new[to_new]`.
    Move {
        /// Index in the old sequence.
        from_old: usize,
        /// Index in the new sequence.
        to_new: usize,
    },
}

impl EditHandler for Vec<EditCommand> {
    fn insert(&mut self, old_row: usize, new_col: usize) {
        self.push(EditCommand::Insert { old_row, new_col });
    }

    fn delete(&mut self, old_row: usize) {
        self.push(EditCommand::Delete { old_row });
    }

    fn move_item(&mut self, from_old: usize, to_new: usize) {
        self.push(EditCommand::Move { from_old, to_new });
    }
}

/// Adapts three closures into an [`EditHandler`].
pub struct EditCallbacks<I, D, M> {
    insert: I,
    delete: D,
    moved: M,
}

impl<I, D, M> EditCallbacks<I, D, M>
where
    I: FnMut(usize, usize),
    D: FnMut(usize),
    M: FnMut(usize, usize),
{
    /// Wraps the insert, delete and move closures.
    #[must_use]
    pub const fn new(insert: I, delete: D, moved: M) -> Self {
        Self {
            insert,
            delete,
            moved,
        }
    }
}

impl<I, D, M> EditHandler for EditCallbacks<I, D, M>
where
    I: FnMut(usize, usize),
    D: FnMut(usize),
    M: FnMut(usize, usize),
{
    fn insert(&mut self, old_row: usize, new_col: usize) {
        (self.insert)(old_row, new_col);
    }

    fn delete(&mut self, old_row: usize) {
        (self.delete)(old_row);
    }

    fn move_item(&mut self, from_old: usize, to_new: usize) {
        (self.moved)(from_old, to_new);
    }
}

/// Walks `queue` in order and reports each step to `handler`.
///
/// A queue of a single record describes two identical sequences; nothing is
/// out of place, so no callback fires.
pub fn execute_edit_queue<H: EditHandler + ?Sized>(queue: &EditQueue, handler: &mut H) {
    if queue.len() <= 1 {
        return;
    }
    let mut records = queue.iter().peekable();
    while let Some(snake) = records.next() {
        for i in 0..snake.len() {
            handler.move_item(snake.start.row + i, snake.start.col + i);
        }
        let Some(next) = records.peek() else {
            break;
        };
        if snake.end.row == next.start.row {
            handler.insert(next.start.row, next.start.col);
        } else {
            handler.delete(next.start.row);
        }
    }
}

//! List reconciliation via Myers' O(ND) shortest edit script.
//!
//! The engine compares an old and a new ordered sequence and reports how to
//! turn one into the other with the fewest insertions and deletions:
//! 1. Finds a middle snake with a bidirectional search over the edit graph
//! 2. Splits the problem around it into a binary tree of matched runs
//! 3. Flattens the tree into an ordered queue of snakes
//! 4. Replays the queue as insert/delete/move callbacks
//!
//! # Example
//!
//! ```
//! use list_diff::diff::{EditCommand, MyersListDiff};
//!
//! let engine = MyersListDiff::default();
//! let script = engine.edit_script(&["a", "b"], &["a", "c"]).unwrap();
//!
//! assert_eq!(
//!     script,
//!     vec![
//!         EditCommand::Move { from_old: 0, to_new: 0 },
//!         EditCommand::Insert { old_row: 1, new_col: 2 },
//!         EditCommand::Delete { old_row: 2 },
//!     ]
//! );
//! ```

pub mod config;
pub mod diff;

pub use crate::config::{DiffSettings, TreeStrategy};
pub use crate::diff::{
    DiffError, EditCommand, EditHandler, EditQueue, MyersListDiff, Point, Snake,
    perform_shortest_edit_sequence,
};

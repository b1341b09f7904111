//! Test utilities for list-diff integration tests
//!
//! This module provides an in-place list reconciler driven by the edit
//! script, an independent LCS reference and tracing setup.

#![allow(dead_code)]

use list_diff::EditHandler;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Rewrites a list in place while the executor walks the edit path.
///
/// The cursor tracks the column reached so far. Everything before it already
/// matches the new list, and the element at it is the next unprocessed one
/// from the old list.
pub struct Reconciler<'a, T> {
    items: Vec<T>,
    target: &'a [T],
    cursor: usize,
}

impl<'a, T: Clone + PartialEq + std::fmt::Debug> Reconciler<'a, T> {
    /// Starts from a copy of `current`, heading for `target`.
    pub fn new(current: &[T], target: &'a [T]) -> Self {
        Self {
            items: current.to_vec(),
            target,
            cursor: 0,
        }
    }

    /// Returns the reconciled list.
    pub fn finish(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug> EditHandler for Reconciler<'_, T> {
    fn insert(&mut self, _old_row: usize, new_col: usize) {
        self.items.insert(new_col - 1, self.target[new_col - 1].clone());
        self.cursor = new_col;
    }

    fn delete(&mut self, _old_row: usize) {
        self.items.remove(self.cursor);
    }

    fn move_item(&mut self, _from_old: usize, to_new: usize) {
        assert_eq!(self.items[to_new], self.target[to_new], "kept element out of place");
        self.cursor = to_new + 1;
    }
}

/// Length of the longest common subsequence, by dynamic programming.
pub fn lcs_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    let mut row = vec![0usize; new.len() + 1];
    for a in old {
        let mut diagonal = 0;
        for (j, b) in new.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if a == b {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[new.len()]
}

/// Number of insertions and deletions in a shortest edit script.
pub fn shortest_edit_distance<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.len() + new.len() - 2 * lcs_len(old, new)
}

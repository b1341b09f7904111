//! Edit-queue assembly.
//!
//! The queue is the edit path written as an ordered list of snakes. It always
//! opens with the common prefix run at `(0, 0)` and closes with the common
//! suffix run ending at `(m, n)`; between any two consecutive records lies
//! exactly one insertion or deletion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::myers::{EditTree, Region};
use crate::config::DiffSettings;
use crate::diff::{DiffError, Point, Snake};

/// Ordered list of snakes tracing a shortest edit path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditQueue {
    snakes: Vec<Snake>,
}

impl EditQueue {
    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snakes.len()
    }

    /// Returns true if the queue has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snakes.is_empty()
    }

    /// Returns the number of insertions and deletions on the path.
    #[must_use]
    pub fn edit_distance(&self) -> usize {
        self.snakes.len().saturating_sub(1)
    }

    /// Returns an iterator over the records.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Snake> {
        self.snakes.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Snake] {
        &self.snakes
    }

    /// Consumes the queue and returns its records.
    #[must_use]
    pub fn into_vec(self) -> Vec<Snake> {
        self.snakes
    }
}

impl<'a> IntoIterator for &'a EditQueue {
    type Item = &'a Snake;
    type IntoIter = std::slice::Iter<'a, Snake>;

    fn into_iter(self) -> Self::IntoIter {
        self.snakes.iter()
    }
}

/// Builds the edit queue that turns `old` into `new`.
///
/// The common prefix and suffix are peeled off first; only the region between
/// them goes through the middle-snake tree.
///
/// # Errors
///
/// Returns [`DiffError::MiddleSnakeNotFound`] if a sub-search fails.
pub fn build_edit_queue<T: Eq>(
    old: &[T],
    new: &[T],
    settings: &DiffSettings,
) -> Result<EditQueue, DiffError> {
    let (m, n) = (old.len(), new.len());
    let prefix = common_prefix(old, new);
    let lead = Snake::new(Point::new(0, 0), Point::new(prefix, prefix));

    if prefix == m && prefix == n {
        debug!("Sequences identical ({m} elements)");
        return Ok(EditQueue { snakes: vec![lead] });
    }

    let suffix = common_suffix(&old[prefix..], &new[prefix..]);
    let region = Region::new(prefix, m - suffix, prefix, n - suffix);
    let work_stack = settings.uses_work_stack(m + n);
    debug!(
        "Diffing {m} -> {n} elements (prefix {prefix}, suffix {suffix}, work stack: {work_stack})"
    );

    let tree = if work_stack {
        EditTree::build_iterative(old, new, region)?
    } else {
        EditTree::build_recursive(old, new, region)?
    };

    let mut snakes = Vec::with_capacity(tree.len() + 2);
    snakes.push(lead);
    snakes.extend(tree.in_order());
    snakes.push(Snake::new(Point::new(m - suffix, n - suffix), Point::new(m, n)));

    debug!("Edit queue holds {} records", snakes.len());
    Ok(EditQueue { snakes })
}

fn common_prefix<T: Eq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

fn common_suffix<T: Eq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

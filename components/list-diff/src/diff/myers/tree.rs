//! Binary tree of middle snakes.
//!
//! Each node holds the snake that splits its region; the left subtree covers
//! the region before the snake and the right subtree the region after it. An
//! in-order walk therefore yields snakes in edit-path order.
//!
//! Nodes live in an arena and refer to their children by [`NodeId`].

use std::ops::Range;

use tracing::trace;

use super::middle_snake::find_middle_snake;
use crate::diff::{DiffError, Point, Snake};

/// A rectangle of the edit graph in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First old-sequence row covered.
    pub row_start: usize,
    /// One past the last old-sequence row covered.
    pub row_end: usize,
    /// First new-sequence column covered.
    pub col_start: usize,
    /// One past the last new-sequence column covered.
    pub col_end: usize,
}

impl Region {
    /// Creates a region from its bounds.
    #[must_use]
    pub const fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Creates a region spanning both sequences in full.
    #[must_use]
    pub const fn whole(old_len: usize, new_len: usize) -> Self {
        Self::new(0, old_len, 0, new_len)
    }

    fn rows(&self) -> Range<usize> {
        self.row_start..self.row_end
    }

    fn cols(&self) -> Range<usize> {
        self.col_start..self.col_end
    }
}

/// Index of a node in an [`EditTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct EditNode {
    snake: Snake,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Outcome of examining one region.
enum Split {
    /// Nothing to record: the region is solved by at most one edit.
    Leaf,
    Node {
        snake: Snake,
        before: Region,
        after: Region,
    },
}

/// Which parent slot a freshly built node should be attached to.
#[derive(Clone, Copy)]
enum Slot {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// Arena-backed tree of the snakes that split the edit graph.
#[derive(Debug, Clone, Default)]
pub struct EditTree {
    nodes: Vec<EditNode>,
    root: Option<NodeId>,
}

impl EditTree {
    /// Builds the tree for `region` by recursing into each half.
    ///
    /// Recursion depth is bounded by the number of nodes along one path, which
    /// is at most the edit distance of the region.
    ///
    /// # Errors
    ///
    /// Propagates [`DiffError::MiddleSnakeNotFound`] from any sub-search.
    pub fn build_recursive<T: Eq>(old: &[T], new: &[T], region: Region) -> Result<Self, DiffError> {
        let mut tree = Self::default();
        tree.root = tree.grow(old, new, region)?;
        Ok(tree)
    }

    /// Builds the same tree as [`EditTree::build_recursive`] with an explicit
    /// work stack, so deep trees cannot exhaust the call stack.
    ///
    /// # Errors
    ///
    /// Propagates [`DiffError::MiddleSnakeNotFound`] from any sub-search.
    pub fn build_iterative<T: Eq>(old: &[T], new: &[T], region: Region) -> Result<Self, DiffError> {
        let mut tree = Self::default();
        let mut pending = vec![(region, Slot::Root)];

        while let Some((region, slot)) = pending.pop() {
            let Split::Node {
                snake,
                before,
                after,
            } = split(old, new, region)?
            else {
                continue;
            };
            let id = tree.push(snake, None, None);
            match slot {
                Slot::Root => tree.root = Some(id),
                Slot::Left(parent) => tree.nodes[parent.0].left = Some(id),
                Slot::Right(parent) => tree.nodes[parent.0].right = Some(id),
            }
            // Before-region pops first.
            pending.push((after, Slot::Right(id)));
            pending.push((before, Slot::Left(id)));
        }

        Ok(tree)
    }

    /// Returns the number of snakes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no region needed splitting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks the snakes in order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    fn grow<T: Eq>(
        &mut self,
        old: &[T],
        new: &[T],
        region: Region,
    ) -> Result<Option<NodeId>, DiffError> {
        match split(old, new, region)? {
            Split::Leaf => Ok(None),
            Split::Node {
                snake,
                before,
                after,
            } => {
                let left = self.grow(old, new, before)?;
                let right = self.grow(old, new, after)?;
                Ok(Some(self.push(snake, left, right)))
            }
        }
    }

    fn push(&mut self, snake: Snake, left: Option<NodeId>, right: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(EditNode { snake, left, right });
        id
    }
}

/// In-order iterator over the snakes of an [`EditTree`].
#[derive(Debug)]
pub struct InOrder<'a> {
    tree: &'a EditTree,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl Iterator for InOrder<'_> {
    type Item = Snake;

    fn next(&mut self) -> Option<Snake> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.nodes[id.0].left;
        }
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        self.current = node.right;
        Some(node.snake)
    }
}

/// Decides how `region` is split.
///
/// Regions with content on both sides are split around their middle snake
/// unless at most one edit separates them. A region empty on one side is a
/// pure run of insertions or deletions; it is halved and a placeholder snake
/// marks the midpoint so every edit ends up adjacent to a recorded point.
fn split<T: Eq>(old: &[T], new: &[T], region: Region) -> Result<Split, DiffError> {
    let rows = region.row_end - region.row_start;
    let cols = region.col_end - region.col_start;

    if rows > 0 && cols > 0 {
        let found = find_middle_snake(&old[region.rows()], &new[region.cols()])?;
        if found.edit_distance <= 1 {
            return Ok(Split::Leaf);
        }
        let snake = found.snake.offset(region.row_start, region.col_start);
        trace!(
            "Split {region:?} at snake {snake:?} (distance {})",
            found.edit_distance
        );
        return Ok(Split::Node {
            snake,
            before: Region::new(
                region.row_start,
                snake.start.row,
                region.col_start,
                snake.start.col,
            ),
            after: Region::new(snake.end.row, region.row_end, snake.end.col, region.col_end),
        });
    }

    if rows <= 1 && cols <= 1 {
        return Ok(Split::Leaf);
    }

    let (point, before, after) = if rows == 0 {
        let mid = region.col_start + cols / 2;
        (
            Point::new(region.row_start, mid),
            Region { col_end: mid, ..region },
            Region { col_start: mid, ..region },
        )
    } else {
        let mid = region.row_start + rows / 2;
        (
            Point::new(mid, region.col_start),
            Region { row_end: mid, ..region },
            Region { row_start: mid, ..region },
        )
    };
    trace!("Halved one-sided {region:?} at {point:?}");
    Ok(Split::Node {
        snake: Snake::at(point),
        before,
        after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Eq>(old: &[T], new: &[T]) -> Vec<Snake> {
        let region = Region::whole(old.len(), new.len());
        EditTree::build_recursive(old, new, region)
            .unwrap()
            .in_order()
            .collect()
    }

    #[test]
    fn test_single_edit_is_leaf() {
        assert!(collect(&['a'], &['a', 'b']).is_empty());
        assert!(collect(&['a', 'b'], &['b']).is_empty());
        assert!(collect::<char>(&[], &['x']).is_empty());
    }

    #[test]
    fn test_replacement_records_midpoint() {
        let snakes = collect(&["Hello"], &["Goodbye"]);
        assert_eq!(snakes, vec![Snake::at(Point::new(0, 1))]);
    }

    #[test]
    fn test_pure_insertions_are_halved() {
        let snakes = collect(&[], &['a', 'b', 'c', 'd']);
        assert_eq!(
            snakes,
            vec![
                Snake::at(Point::new(0, 1)),
                Snake::at(Point::new(0, 2)),
                Snake::at(Point::new(0, 3)),
            ]
        );
    }

    #[test]
    fn test_pure_deletions_are_halved() {
        let snakes = collect(&['a', 'b', 'c'], &[]);
        assert_eq!(
            snakes,
            vec![Snake::at(Point::new(1, 0)), Snake::at(Point::new(2, 0))]
        );
    }

    #[test]
    fn test_sub_region_uses_absolute_coordinates() {
        let old = ['x', 'a', 'y'];
        let new = ['x', 'b', 'y'];
        let tree = EditTree::build_recursive(&old, &new, Region::new(1, 2, 1, 2)).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.in_order().next(), Some(Snake::at(Point::new(1, 2))));
    }

    #[test]
    fn test_iterative_matches_recursive() {
        let old: Vec<char> = "abccdeff".chars().collect();
        let new: Vec<char> = "cdfabdgfg".chars().collect();
        let region = Region::whole(old.len(), new.len());
        let recursive = EditTree::build_recursive(&old, &new, region).unwrap();
        let iterative = EditTree::build_iterative(&old, &new, region).unwrap();
        assert_eq!(recursive.len(), iterative.len());
        assert!(recursive.in_order().eq(iterative.in_order()));
    }

    #[test]
    fn test_in_order_walk_is_monotonic() {
        let old: Vec<u8> = b"the quick brown fox".to_vec();
        let new: Vec<u8> = b"a quick brawn dog jumps".to_vec();
        let tree =
            EditTree::build_iterative(&old, &new, Region::whole(old.len(), new.len())).unwrap();
        let snakes: Vec<Snake> = tree.in_order().collect();
        for pair in snakes.windows(2) {
            assert!(pair[0].end.row <= pair[1].start.row);
            assert!(pair[0].end.col <= pair[1].start.col);
        }
    }
}

//! Myers' linear-space refinement of the O(ND) difference algorithm.
//!
//! Instead of tracing the whole edit path, the engine repeatedly finds a
//! middle snake, a run of matches that a shortest edit script passes through,
//! and divides the edit graph around it. The resulting snakes form a binary
//! tree whose in-order walk is the edit path.

mod frontier;
pub mod middle_snake;
pub mod tree;

pub use middle_snake::find_middle_snake;
pub use tree::{EditTree, InOrder, NodeId, Region};

//! Error types for edit-script construction.

use thiserror::Error;

/// Errors that can occur while building an edit script.
///
/// The search always terminates with a middle snake when element equality is
/// a true equivalence relation, so this error means a broken `Eq` impl or a
/// defect in the engine. Retrying with the same inputs cannot succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The forward and backward frontiers never met.
    #[error(
        "No middle snake found between sequences of length {old_len} and {new_len}; \
         element equality is not an equivalence relation"
    )]
    MiddleSnakeNotFound {
        /// Length of the old sub-sequence being searched.
        old_len: usize,
        /// Length of the new sub-sequence being searched.
        new_len: usize,
    },
}

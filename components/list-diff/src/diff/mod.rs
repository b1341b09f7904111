//! Shortest-edit-script engine for ordered lists.
//!
//! This module wires the layers together: the Myers middle-snake search in
//! [`myers`], queue assembly in [`queue`] and callback replay in
//! [`executor`]. [`MyersListDiff`] is the entry point for most callers.

pub mod error;
pub mod executor;
pub mod myers;
pub mod queue;
pub mod traits;

pub use error::DiffError;
pub use executor::{EditCallbacks, EditCommand, execute_edit_queue};
pub use myers::{EditTree, Region, find_middle_snake};
pub use queue::{EditQueue, build_edit_queue};
pub use traits::{EditHandler, MiddleSnake, Point, Snake};

use crate::config::DiffSettings;

/// Myers list diff engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersListDiff {
    settings: DiffSettings,
}

impl MyersListDiff {
    /// Creates a new engine with the given settings.
    #[must_use]
    pub const fn new(settings: DiffSettings) -> Self {
        Self { settings }
    }

    /// Returns the engine settings.
    #[must_use]
    pub const fn settings(&self) -> &DiffSettings {
        &self.settings
    }

    /// Computes the edit queue turning `old` into `new`.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError`] if the middle-snake search fails.
    pub fn edit_queue<T: Eq>(&self, old: &[T], new: &[T]) -> Result<EditQueue, DiffError> {
        build_edit_queue(old, new, &self.settings)
    }

    /// Computes the edit script and reports it to `handler`.
    ///
    /// The queue is built in full before the first callback fires, so a
    /// failed search never leaves the handler half-applied.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError`] if the middle-snake search fails.
    pub fn perform<T: Eq, H: EditHandler + ?Sized>(
        &self,
        old: &[T],
        new: &[T],
        handler: &mut H,
    ) -> Result<(), DiffError> {
        let queue = self.edit_queue(old, new)?;
        execute_edit_queue(&queue, handler);
        Ok(())
    }

    /// Computes the edit script as a list of commands.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError`] if the middle-snake search fails.
    pub fn edit_script<T: Eq>(&self, old: &[T], new: &[T]) -> Result<Vec<EditCommand>, DiffError> {
        let mut commands = Vec::new();
        self.perform(old, new, &mut commands)?;
        Ok(commands)
    }
}

/// Computes the shortest edit script from `old` to `new` with default
/// settings and reports each step through the three closures.
///
/// # Errors
///
/// Returns [`DiffError`] if the middle-snake search fails; no callback has
/// fired in that case.
pub fn perform_shortest_edit_sequence<T, I, D, M>(
    old: &[T],
    new: &[T],
    insert: I,
    delete: D,
    moved: M,
) -> Result<(), DiffError>
where
    T: Eq,
    I: FnMut(usize, usize),
    D: FnMut(usize),
    M: FnMut(usize, usize),
{
    let mut callbacks = EditCallbacks::new(insert, delete, moved);
    MyersListDiff::default().perform(old, new, &mut callbacks)
}

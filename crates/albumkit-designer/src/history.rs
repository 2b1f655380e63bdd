//! Undo/redo history of full-document snapshots.
//!
//! Every state-changing operation pushes the pre-change [`Design`] onto the
//! past stack and clears the future stack. Live drag/resize/pan gestures
//! record exactly one snapshot at interaction start, so a whole gesture
//! undoes in one step.

use crate::model::Design;

/// Past/future snapshot stacks for one editing session.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Design>,
    future: Vec<Design>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-change design and invalidates any redo chain.
    pub fn record(&mut self, design: &Design) {
        self.past.push(design.clone());
        self.future.clear();
    }

    /// Restores the most recent snapshot into `current`. Returns `false`
    /// (leaving `current` untouched) when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Design) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(std::mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Mirror of [`History::undo`].
    pub fn redo(&mut self, current: &mut Design) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(std::mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    /// Drops both stacks. Called when the active design changes; history
    /// does not span across distinct designs.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

//! Linear undo/redo history
//!
//! `History` stores whole snapshots rather than diffs. Every edit hands a fully
//! formed value to [`History::commit`]; undo and redo only shuffle snapshots
//! between the three stacks and never call back into the model.

use std::collections::VecDeque;

/// Undo/redo container over an immutable snapshot type.
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Older snapshots, oldest first.
    past: VecDeque<T>,
    /// The current snapshot.
    present: T,
    /// Undone snapshots, nearest redo first.
    future: VecDeque<T>,
    /// Maximum number of past entries kept, if any.
    limit: Option<usize>,
}

impl<T: Clone + PartialEq> History<T> {
    /// Create an unbounded history starting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` undo steps.
    ///
    /// The oldest entries are dropped first. `None` keeps everything;
    /// `Some(0)` keeps nothing, so undo is never available.
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::new(initial)
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &T {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Replace the present snapshot and record the old one for undo.
    ///
    /// Committing a value equal to the present is a no-op, so idempotent UI
    /// actions do not pile up empty history entries. Any real commit
    /// invalidates the redo stack. Returns `false` for the no-op case.
    pub fn commit(&mut self, next: T) -> bool {
        if next == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        self.future.clear();
        self.enforce_limit();
        true
    }

    /// Step back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        self.enforce_limit();
        true
    }

    /// Drop all history and start over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.past.clear();
        self.future.clear();
        self.present = initial;
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with(values: &[i32]) -> History<i32> {
        let mut history = History::new(0);
        for value in values {
            history.commit(*value);
        }
        history
    }

    #[test]
    fn test_initial_state_has_no_history() {
        let history = History::new("start");
        assert_eq!(*history.state(), "start");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut history = history_with(&[1, 2, 3, 4]);

        for _ in 0..4 {
            assert!(history.undo());
        }
        assert_eq!(*history.state(), 0);
        assert!(!history.can_undo());

        for _ in 0..4 {
            assert!(history.redo());
        }
        assert_eq!(*history.state(), 4);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_clears_redo() {
        let mut history = history_with(&[1, 2, 3]);
        history.undo();
        history.undo();
        assert_eq!(history.future_len(), 2);

        assert!(history.commit(10));
        assert!(!history.can_redo());
        assert_eq!(*history.state(), 10);
        assert_eq!(history.past_len(), 2);
    }

    #[test]
    fn test_commit_equal_value_is_ignored() {
        let mut history = history_with(&[1, 2]);
        history.undo();

        assert!(!history.commit(1));
        assert_eq!(history.past_len(), 1);
        assert_eq!(history.future_len(), 1);
        assert_eq!(*history.state(), 1);
    }

    #[test]
    fn test_boundary_noops() {
        let mut history = History::new(5);
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(*history.state(), 5);

        history.commit(6);
        assert!(!history.redo());
        assert_eq!(*history.state(), 6);
    }

    #[test]
    fn test_undo_pushes_to_front_of_future() {
        let mut history = history_with(&[1, 2, 3]);
        history.undo();
        history.undo();
        // Nearest redo is 2, then 3.
        history.redo();
        assert_eq!(*history.state(), 2);
        history.redo();
        assert_eq!(*history.state(), 3);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut history = history_with(&[1, 2, 3]);
        history.undo();
        history.reset(42);
        assert_eq!(*history.state(), 42);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(0, Some(2));
        assert_eq!(history.limit(), Some(2));
        for value in 1..=5 {
            history.commit(value);
        }
        assert_eq!(history.past_len(), 2);

        history.undo();
        history.undo();
        assert_eq!(*history.state(), 3);
        assert!(!history.undo());
    }

    #[test]
    fn test_limit_applies_on_redo() {
        let mut history = History::with_limit(0, Some(1));
        history.commit(1);
        history.commit(2);
        history.undo();
        assert_eq!(history.past_len(), 0);
        history.redo();
        assert_eq!(history.past_len(), 1);
        assert_eq!(*history.state(), 2);
    }

    #[test]
    fn test_zero_limit_disables_undo() {
        let mut history = History::with_limit(0, Some(0));
        assert!(history.commit(1));
        assert_eq!(*history.state(), 1);
        assert!(!history.can_undo());
        assert!(!history.undo());
    }
}

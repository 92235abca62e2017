//! Linear undo/redo history of state snapshots.
//!
//! Provides an immutable past/present/future envelope. Every operation
//! borrows the envelope and returns a new one, following functional
//! programming principles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the strict history operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Nothing to undo: past is empty")]
    NothingToUndo,

    #[error("Nothing to redo: future is empty")]
    NothingToRedo,
}

/// Past, present and future snapshots of a wrapped state.
///
/// `past` is ordered oldest first, `future` nearest-undone first. The
/// present is the only value consumers should treat as live state.
///
/// History is immutable - `undo`, `redo`, `checkpoint` and `replace`
/// return a new history and leave the original untouched.
///
/// # Example
///
/// ```rust
/// use undoable::core::History;
///
/// let history = History::new(0);
/// let history = history.checkpoint(1);
/// let history = history.checkpoint(2);
///
/// assert_eq!(history.past(), &[0, 1]);
/// assert_eq!(*history.present(), 2);
///
/// let history = history.undo();
/// assert_eq!(*history.present(), 1);
/// assert_eq!(history.future(), &[2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct History<S> {
    past: Vec<S>,
    present: S,
    future: Vec<S>,
}

impl<S: Default> Default for History<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> History<S> {
    /// Create a history with no past and no future.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let history = History::new("draft");
    /// assert!(!history.can_undo());
    /// assert!(!history.can_redo());
    /// ```
    pub fn new(present: S) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
        }
    }

    /// Assemble a history from its three parts.
    ///
    /// No validation is performed; the caller is responsible for the
    /// ordering of `past` (oldest first) and `future` (nearest first).
    pub fn from_parts(past: Vec<S>, present: S, future: Vec<S>) -> Self {
        Self {
            past,
            present,
            future,
        }
    }

    /// Split the history into `(past, present, future)`.
    pub fn into_parts(self) -> (Vec<S>, S, Vec<S>) {
        (self.past, self.present, self.future)
    }

    /// Snapshots before the present, oldest first.
    pub fn past(&self) -> &[S] {
        &self.past
    }

    /// The current state.
    pub fn present(&self) -> &S {
        &self.present
    }

    /// Snapshots undone from the present, nearest first.
    pub fn future(&self) -> &[S] {
        &self.future
    }

    /// Consume the history and keep only the current state.
    pub fn into_present(self) -> S {
        self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Total number of snapshots held, including the present.
    pub fn snapshot_count(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }
}

impl<S: Clone> History<S> {
    /// Step back one snapshot, returning a new history.
    ///
    /// The last element of `past` becomes the present and the previous
    /// present becomes the head of `future`. With an empty past this
    /// returns an equal copy of the history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let history = History::from_parts(vec![1, 2], 3, vec![4]);
    /// let undone = history.undo();
    ///
    /// assert_eq!(undone, History::from_parts(vec![1], 2, vec![3, 4]));
    /// assert_eq!(History::new(0).undo(), History::new(0));
    /// ```
    pub fn undo(&self) -> Self {
        self.try_undo().unwrap_or_else(|_| self.clone())
    }

    /// Step forward one snapshot, returning a new history.
    ///
    /// The head of `future` becomes the present and the previous present
    /// is appended to `past`. With an empty future this returns an equal
    /// copy of the history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let history = History::from_parts(vec![1], 2, vec![3, 4]);
    /// let redone = history.redo();
    ///
    /// assert_eq!(redone, History::from_parts(vec![1, 2], 3, vec![4]));
    /// ```
    pub fn redo(&self) -> Self {
        self.try_redo().unwrap_or_else(|_| self.clone())
    }

    /// Like [`History::undo`], but fails when there is nothing to undo.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::{History, HistoryError};
    ///
    /// assert_eq!(History::new(0).try_undo(), Err(HistoryError::NothingToUndo));
    /// ```
    pub fn try_undo(&self) -> Result<Self, HistoryError> {
        let (present, past) = self
            .past
            .split_last()
            .ok_or(HistoryError::NothingToUndo)?;

        let mut future = Vec::with_capacity(self.future.len() + 1);
        future.push(self.present.clone());
        future.extend_from_slice(&self.future);

        Ok(Self {
            past: past.to_vec(),
            present: present.clone(),
            future,
        })
    }

    /// Like [`History::redo`], but fails when there is nothing to redo.
    pub fn try_redo(&self) -> Result<Self, HistoryError> {
        let (present, future) = self
            .future
            .split_first()
            .ok_or(HistoryError::NothingToRedo)?;

        let mut past = Vec::with_capacity(self.past.len() + 1);
        past.extend_from_slice(&self.past);
        past.push(self.present.clone());

        Ok(Self {
            past,
            present: present.clone(),
            future: future.to_vec(),
        })
    }

    /// Record a new present, returning a new history.
    ///
    /// The previous present is appended to `past` and the future is
    /// cleared: redo history is invalidated once a new branch is taken.
    pub fn checkpoint(&self, present: S) -> Self {
        let mut past = Vec::with_capacity(self.past.len() + 1);
        past.extend_from_slice(&self.past);
        past.push(self.present.clone());

        Self {
            past,
            present,
            future: Vec::new(),
        }
    }

    /// Swap the present in place without touching past or future.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable::core::History;
    ///
    /// let history = History::from_parts(vec![1], 2, vec![3]);
    /// let replaced = history.replace(20);
    ///
    /// assert_eq!(replaced, History::from_parts(vec![1], 20, vec![3]));
    /// assert_eq!(*history.present(), 2); // Original unchanged
    /// ```
    pub fn replace(&self, present: S) -> Self {
        Self {
            past: self.past.clone(),
            present,
            future: self.future.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Snapshot {
        answer: u32,
    }

    fn snap(answer: u32) -> Snapshot {
        Snapshot { answer }
    }

    fn with_history() -> History<Snapshot> {
        History::from_parts(vec![snap(1), snap(2)], snap(3), vec![snap(4), snap(5)])
    }

    #[test]
    fn new_history_has_no_past_or_future() {
        let history = History::new(snap(7));
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
        assert_eq!(history.present(), &snap(7));
        assert_eq!(history.snapshot_count(), 1);
    }

    #[test]
    fn undo_moves_last_past_into_present() {
        let history = with_history().undo();

        assert_eq!(history.present(), &snap(2));
        assert_eq!(history.past(), &[snap(1)]);
        assert_eq!(history.future(), &[snap(3), snap(4), snap(5)]);
    }

    #[test]
    fn redo_moves_first_future_into_present() {
        let history = with_history().redo();

        assert_eq!(history.present(), &snap(4));
        assert_eq!(history.past(), &[snap(1), snap(2), snap(3)]);
        assert_eq!(history.future(), &[snap(5)]);
    }

    #[test]
    fn undo_without_past_is_noop() {
        let history = History::from_parts(vec![], snap(1), vec![snap(2)]);
        assert_eq!(history.undo(), history);
        assert_eq!(history.try_undo(), Err(HistoryError::NothingToUndo));
    }

    #[test]
    fn redo_without_future_is_noop() {
        let history = History::from_parts(vec![snap(0)], snap(1), vec![]);
        assert_eq!(history.redo(), history);
        assert_eq!(history.try_redo(), Err(HistoryError::NothingToRedo));
    }

    #[test]
    fn undo_then_redo_restores_history() {
        let history = with_history();
        assert_eq!(history.undo().redo(), history);
    }

    #[test]
    fn checkpoint_clears_future() {
        let history = with_history().checkpoint(snap(9));

        assert_eq!(history.past(), &[snap(1), snap(2), snap(3)]);
        assert_eq!(history.present(), &snap(9));
        assert!(history.future().is_empty());
    }

    #[test]
    fn replace_keeps_past_and_future() {
        let original = with_history();
        let history = original.replace(snap(9));

        assert_eq!(history.past(), original.past());
        assert_eq!(history.future(), original.future());
        assert_eq!(history.present(), &snap(9));
    }

    #[test]
    fn operations_are_immutable() {
        let history = with_history();
        let _ = history.undo();
        let _ = history.redo();
        let _ = history.checkpoint(snap(9));

        assert_eq!(history, with_history());
    }

    #[test]
    fn snapshot_count_includes_present() {
        assert_eq!(with_history().snapshot_count(), 5);
        assert_eq!(History::new(snap(0)).snapshot_count(), 1);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = with_history();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History<Snapshot> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }

    #[test]
    fn history_serializes_with_named_parts() {
        let history = History::from_parts(vec![1], 2, vec![3]);
        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "past": [1], "present": 2, "future": [3] })
        );
    }

    #[test]
    fn into_parts_returns_all_snapshots() {
        let (past, present, future) = with_history().into_parts();
        assert_eq!(past.len(), 2);
        assert_eq!(present, snap(3));
        assert_eq!(future.len(), 2);
    }
}

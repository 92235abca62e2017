//! Undoable: linear undo/redo for any pure reducer
//!
//! Undoable follows the "pure core, imperative shell" philosophy. The core
//! wraps a state-transition function into one that tracks past, present
//! and future snapshots, with no side effects. The store is a thin shell
//! that owns the current envelope and serializes dispatches.
//!
//! # Core Concepts
//!
//! - **Reducer**: Pure state transitions via the `Reducer` trait
//! - **History**: Immutable past/present/future envelope
//! - **Checkpoint filter**: Which action types record a new undo step
//! - **Undoable**: The history reducer, itself a `Reducer` over `History`
//!
//! # Example
//!
//! ```rust
//! use undoable::core::{from_fn, make_undoable, History, HistoryAction};
//!
//! let counter = from_fn(|| 0, |state: &i32, action: &&str| match *action {
//!     "add" => state + 1,
//!     _ => *state,
//! });
//! let undoable = make_undoable(counter, ["add"]);
//!
//! let actions = [
//!     HistoryAction::apply("add"),
//!     HistoryAction::apply("add"),
//!     HistoryAction::apply("noop"),
//!     HistoryAction::undo(),
//!     HistoryAction::undo(),
//!     HistoryAction::redo(),
//! ];
//! let history = actions
//!     .iter()
//!     .fold(undoable.initial(), |history, action| undoable.apply(&history, action));
//!
//! assert_eq!(history, History::from_parts(vec![0], 1, vec![2]));
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, UndoableBuilder};
pub use crate::core::{
    make_undoable, Action, CheckpointFilter, History, HistoryAction, HistoryError, Reducer,
    Undoable,
};
pub use store::Store;

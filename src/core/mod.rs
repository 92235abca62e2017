//! Core history types and logic.
//!
//! This module contains the pure functional core of the undo/redo wrapper:
//! - Action identification via the `Action` trait
//! - The past/present/future `History` envelope
//! - Checkpoint policy via `CheckpointFilter`
//! - The `Undoable` history reducer around any inner `Reducer`
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod filter;
mod history;
mod reducer;
mod undoable;

pub use action::{Action, HistoryAction, REDO, UNDO};
pub use filter::{CheckpointFilter, FilterMode};
pub use history::{History, HistoryError};
pub use reducer::{from_fn, try_from_fn, FnReducer, Reducer, TryFnReducer};
pub use undoable::{make_undoable, Undoable};

//! Builder API for ergonomic history reducer construction.
//!
//! This module provides a fluent builder and a macro for wrapping reducers
//! with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod macros;
pub mod undoable;

pub use error::BuildError;
pub use undoable::UndoableBuilder;

//! Build errors for the history reducer builder.

use thiserror::Error;

/// Errors that can occur when building a history reducer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Inner reducer not specified. Call .reducer(reducer) before .build()")]
    MissingReducer,

    #[error("Conflicting checkpoint policies: {0}")]
    ConflictingFilters(&'static str),
}

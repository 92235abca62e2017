//! Checkpoint policy for the history reducer.
//!
//! A filter decides, from an action's type identifier alone, whether the
//! action records a new history checkpoint or only updates the present.

use std::collections::BTreeSet;

/// How the listed action types are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Only the listed action types create checkpoints
    #[default]
    Accept,
    /// Every action type creates a checkpoint except the listed ones
    Ignore,
}

/// Fixed set of action-type identifiers controlling checkpoint policy.
///
/// The default filter is an empty allow-list: no action checkpoints and
/// every delegated action only replaces the present. Identifiers that no
/// action ever reports are simply inert.
///
/// # Example
///
/// ```rust
/// use undoable::core::CheckpointFilter;
///
/// let filter = CheckpointFilter::accept(["ADD_TODO", "DELETE_TODO"]);
///
/// assert!(filter.is_checkpoint("ADD_TODO"));
/// assert!(!filter.is_checkpoint("SET_VISIBILITY_FILTER"));
///
/// let filter = CheckpointFilter::ignore(["SET_VISIBILITY_FILTER"]);
///
/// assert!(filter.is_checkpoint("ADD_TODO"));
/// assert!(!filter.is_checkpoint("SET_VISIBILITY_FILTER"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CheckpointFilter {
    mode: FilterMode,
    kinds: BTreeSet<String>,
}

impl CheckpointFilter {
    /// Allow-list: only the given action types create checkpoints.
    pub fn accept<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_mode(FilterMode::Accept, kinds)
    }

    /// Ignore-list: every action type except the given ones creates a checkpoint.
    pub fn ignore<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_mode(FilterMode::Ignore, kinds)
    }

    /// Every delegated action creates a checkpoint.
    pub fn all() -> Self {
        Self::with_mode(FilterMode::Ignore, std::iter::empty::<String>())
    }

    /// No delegated action creates a checkpoint.
    pub fn none() -> Self {
        Self::default()
    }

    fn with_mode<I, K>(mode: FilterMode, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            mode,
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if an action of this type records a checkpoint (pure).
    pub fn is_checkpoint(&self, kind: &str) -> bool {
        let listed = self.kinds.contains(kind);
        match self.mode {
            FilterMode::Accept => listed,
            FilterMode::Ignore => !listed,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// The listed action types, in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}

//! Builder for constructing history reducers.

use crate::builder::error::BuildError;
use crate::core::{CheckpointFilter, Reducer, Undoable};

/// Builder for wrapping a reducer with a fluent API.
///
/// # Example
///
/// ```rust
/// use undoable::builder::UndoableBuilder;
/// use undoable::core::{from_fn, HistoryAction};
///
/// let counter = from_fn(|| 0, |state: &i32, action: &&str| match *action {
///     "add" => state + 1,
///     _ => *state,
/// });
///
/// let undoable = UndoableBuilder::new()
///     .reducer(counter)
///     .checkpoint_on(["add"])
///     .build()
///     .unwrap();
///
/// let history = undoable.apply(&undoable.initial(), &HistoryAction::apply("add"));
/// assert_eq!(history.past(), &[0]);
/// ```
pub struct UndoableBuilder<R> {
    reducer: Option<R>,
    checkpoint_on: Vec<String>,
    ignore: Vec<String>,
    filter: Option<CheckpointFilter>,
}

impl<R> UndoableBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            checkpoint_on: Vec::new(),
            ignore: Vec::new(),
            filter: None,
        }
    }

    /// Set the inner reducer (required).
    pub fn reducer(mut self, reducer: R) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Record a checkpoint for these action types only.
    pub fn checkpoint_on<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.checkpoint_on.extend(kinds.into_iter().map(Into::into));
        self
    }

    /// Record a checkpoint for every action type except these.
    pub fn ignore<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.ignore.extend(kinds.into_iter().map(Into::into));
        self
    }

    /// Record a checkpoint for every delegated action.
    pub fn checkpoint_all(self) -> Self {
        self.filter(CheckpointFilter::all())
    }

    /// Use a prebuilt filter.
    pub fn filter(mut self, filter: CheckpointFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Build the history reducer.
    /// Returns an error if the reducer is missing or policies conflict.
    pub fn build<S, A>(self) -> Result<Undoable<R, S, A>, BuildError>
    where
        R: Reducer<S, A>,
    {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        let has_lists = !self.checkpoint_on.is_empty() || !self.ignore.is_empty();
        if self.filter.is_some() && has_lists {
            return Err(BuildError::ConflictingFilters(
                "an explicit filter cannot be combined with checkpoint_on or ignore",
            ));
        }
        if !self.checkpoint_on.is_empty() && !self.ignore.is_empty() {
            return Err(BuildError::ConflictingFilters(
                "checkpoint_on and ignore are mutually exclusive",
            ));
        }

        let filter = match self.filter {
            Some(filter) => filter,
            None if !self.ignore.is_empty() => CheckpointFilter::ignore(self.ignore),
            None => CheckpointFilter::accept(self.checkpoint_on),
        };

        Ok(Undoable::new(reducer, filter))
    }
}

impl<R> Default for UndoableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{from_fn, FilterMode, FnReducer, History, HistoryAction};

    type Counter = FnReducer<fn() -> i32, fn(&i32, &&'static str) -> i32>;

    fn counter() -> Counter {
        fn init() -> i32 {
            0
        }
        fn reduce(state: &i32, action: &&'static str) -> i32 {
            match *action {
                "add" => state + 1,
                _ => *state,
            }
        }
        from_fn(init as fn() -> i32, reduce as fn(&i32, &&'static str) -> i32)
    }

    #[test]
    fn builder_validates_required_reducer() {
        let result = UndoableBuilder::<Counter>::new()
            .checkpoint_on(["add"])
            .build::<i32, &'static str>();

        assert!(matches!(result, Err(BuildError::MissingReducer)));
    }

    #[test]
    fn builder_rejects_mixed_lists() {
        let result = UndoableBuilder::new()
            .reducer(counter())
            .checkpoint_on(["add"])
            .ignore(["noop"])
            .build::<i32, &'static str>();

        assert!(matches!(result, Err(BuildError::ConflictingFilters(_))));
    }

    #[test]
    fn builder_rejects_filter_with_lists() {
        let result = UndoableBuilder::new()
            .reducer(counter())
            .filter(CheckpointFilter::all())
            .ignore(["noop"])
            .build::<i32, &'static str>();

        assert!(matches!(result, Err(BuildError::ConflictingFilters(_))));
    }

    #[test]
    fn default_build_never_checkpoints() {
        let undoable = UndoableBuilder::new()
            .reducer(counter())
            .build::<i32, &'static str>()
            .unwrap();

        assert_eq!(undoable.filter(), &CheckpointFilter::none());

        let history = undoable.apply(&undoable.initial(), &HistoryAction::apply("add"));
        assert_eq!(history, History::new(1));
    }

    #[test]
    fn ignore_list_builds_ignore_filter() {
        let undoable = UndoableBuilder::new()
            .reducer(counter())
            .ignore(["noop"])
            .build::<i32, &'static str>()
            .unwrap();

        assert_eq!(undoable.filter().mode(), FilterMode::Ignore);
        assert!(undoable.filter().is_checkpoint("add"));
    }

    #[test]
    fn checkpoint_all_records_every_action() {
        let undoable = UndoableBuilder::new()
            .reducer(counter())
            .checkpoint_all()
            .build::<i32, &'static str>()
            .unwrap();

        let history = undoable.apply(&undoable.initial(), &HistoryAction::apply("noop"));
        assert_eq!(history, History::from_parts(vec![0], 0, vec![]));
    }

    #[test]
    fn checkpoint_on_accumulates() {
        let undoable = UndoableBuilder::new()
            .reducer(counter())
            .checkpoint_on(["add"])
            .checkpoint_on(vec![String::from("remove")])
            .build::<i32, &'static str>()
            .unwrap();

        assert_eq!(
            undoable.filter().kinds().collect::<Vec<_>>(),
            vec!["add", "remove"]
        );
    }
}

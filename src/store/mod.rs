//! Store that owns a history envelope and dispatches actions into it.
//!
//! This is the imperative shell around the pure history reducer: it keeps
//! the single current [`History`] and replaces it after every successful
//! dispatch. Dispatches are serialized through `&mut self`.

use crate::core::{Action, History, HistoryAction, Reducer, Undoable};

/// Holder of the current history of an undoable reducer.
///
/// # Example
///
/// ```rust
/// use undoable::core::{from_fn, make_undoable};
/// use undoable::store::Store;
///
/// let counter = from_fn(|| 0, |state: &i32, action: &&str| match *action {
///     "add" => state + 1,
///     _ => *state,
/// });
/// let mut store = Store::new(make_undoable(counter, ["add"])).unwrap();
///
/// store.dispatch("add").unwrap();
/// store.dispatch("add").unwrap();
/// store.undo().unwrap();
///
/// assert_eq!(*store.state(), 1);
/// assert!(store.can_redo());
/// ```
pub struct Store<R, S, A> {
    undoable: Undoable<R, S, A>,
    history: History<S>,
}

impl<R, S, A> Store<R, S, A>
where
    R: Reducer<S, A>,
    S: Clone,
    A: Action,
{
    /// Create a store seeded with the reducer's initial envelope.
    pub fn new(undoable: Undoable<R, S, A>) -> Result<Self, R::Error> {
        let history = undoable.init()?;
        Ok(Self { undoable, history })
    }

    /// Create a store around an existing envelope.
    pub fn with_history(undoable: Undoable<R, S, A>, history: History<S>) -> Self {
        Self { undoable, history }
    }

    /// Dispatch one action and return the new present.
    ///
    /// When the inner reducer fails the stored history is left untouched
    /// and the error is returned unchanged.
    pub fn dispatch(&mut self, action: impl Into<HistoryAction<A>>) -> Result<&S, R::Error> {
        let action = action.into();
        let _span = tracing::debug_span!("undoable.dispatch", kind = %action.kind()).entered();

        self.history = self.undoable.step(&self.history, &action)?;
        Ok(self.history.present())
    }

    /// Dispatch the reserved undo action.
    pub fn undo(&mut self) -> Result<&S, R::Error> {
        self.dispatch(HistoryAction::Undo)
    }

    /// Dispatch the reserved redo action.
    pub fn redo(&mut self) -> Result<&S, R::Error> {
        self.dispatch(HistoryAction::Redo)
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        self.history.present()
    }

    /// Get the full envelope (pure)
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the stored envelope, returning the previous one.
    pub fn replace_history(&mut self, history: History<S>) -> History<S> {
        std::mem::replace(&mut self.history, history)
    }

    /// Get the wrapped history reducer.
    pub fn undoable(&self) -> &Undoable<R, S, A> {
        &self.undoable
    }
}

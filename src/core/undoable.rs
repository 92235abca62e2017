//! The history reducer: undo/redo for any inner reducer.
//!
//! [`Undoable`] wraps a [`Reducer`] over `S` and behaves as a reducer over
//! [`History<S>`]. `Undo` and `Redo` move snapshots between past, present
//! and future; every other action is delegated to the inner reducer with
//! the present snapshot, and the [`CheckpointFilter`] decides whether the
//! previous present is recorded.

use super::action::{Action, HistoryAction, REDO, UNDO};
use super::filter::CheckpointFilter;
use super::history::History;
use super::reducer::Reducer;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

const TARGET: &str = "undoable::history";

/// Reducer over [`History<S>`] built around an inner reducer over `S`.
///
/// # Example
///
/// ```rust
/// use undoable::core::{from_fn, make_undoable, HistoryAction};
///
/// let counter = from_fn(|| 0, |state: &i32, action: &&str| match *action {
///     "add" => state + 1,
///     _ => *state,
/// });
/// let undoable = make_undoable(counter, ["add"]);
///
/// let history = undoable.initial();
/// let history = undoable.apply(&history, &"add".into());
/// let history = undoable.apply(&history, &"add".into());
/// assert_eq!(*history.present(), 2);
///
/// let history = undoable.apply(&history, &HistoryAction::undo());
/// assert_eq!(*history.present(), 1);
/// assert_eq!(history.future(), &[2]);
/// ```
pub struct Undoable<R, S, A> {
    reducer: R,
    filter: CheckpointFilter,
    _phantom: PhantomData<fn(&S, &A) -> S>,
}

/// Wrap `reducer` so that actions of the listed types record checkpoints.
///
/// Action types not listed update the present without touching past or
/// future. Use [`Undoable::new`] for other checkpoint policies.
pub fn make_undoable<R, S, A, I, K>(reducer: R, checkpoint_kinds: I) -> Undoable<R, S, A>
where
    R: Reducer<S, A>,
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    Undoable::new(reducer, CheckpointFilter::accept(checkpoint_kinds))
}

impl<R, S, A> Undoable<R, S, A>
where
    R: Reducer<S, A>,
{
    /// Wrap `reducer` with an explicit checkpoint filter.
    pub fn new(reducer: R, filter: CheckpointFilter) -> Self {
        Self {
            reducer,
            filter,
            _phantom: PhantomData,
        }
    }

    /// The checkpoint filter fixed at wrap time.
    pub fn filter(&self) -> &CheckpointFilter {
        &self.filter
    }

    /// The wrapped reducer.
    pub fn inner(&self) -> &R {
        &self.reducer
    }

    /// Unwrap into the inner reducer.
    pub fn into_inner(self) -> R {
        self.reducer
    }

    /// Initial envelope: the inner reducer's initial state, no past, no future.
    pub fn init(&self) -> Result<History<S>, R::Error> {
        self.reducer.init().map(History::new)
    }
}

impl<R, S, A> Undoable<R, S, A>
where
    R: Reducer<S, A>,
    S: Clone,
    A: Action,
{
    /// Run one transition, seeding the envelope first when there is none.
    ///
    /// Errors from the inner reducer are returned unchanged; the input
    /// envelope is never modified.
    pub fn reduce_or_init(
        &self,
        history: Option<&History<S>>,
        action: &HistoryAction<A>,
    ) -> Result<History<S>, R::Error> {
        match history {
            Some(history) => self.step(history, action),
            None => {
                let seeded = self.init()?;
                self.step(&seeded, action)
            }
        }
    }

    /// Run one transition on an existing envelope.
    ///
    /// `UNDO` and `REDO` are reserved: a delegated action reporting either
    /// kind is handled as `Undo`/`Redo` and never reaches the inner reducer.
    pub fn step(
        &self,
        history: &History<S>,
        action: &HistoryAction<A>,
    ) -> Result<History<S>, R::Error> {
        match action {
            HistoryAction::Undo => Ok(Self::undo(history)),
            HistoryAction::Redo => Ok(Self::redo(history)),
            HistoryAction::Apply(inner) if inner.kind() == UNDO => Ok(Self::undo(history)),
            HistoryAction::Apply(inner) if inner.kind() == REDO => Ok(Self::redo(history)),
            HistoryAction::Apply(inner) => {
                let present = self.reducer.reduce(history.present(), inner)?;
                let checkpoint = self.filter.is_checkpoint(inner.kind());

                let next = if checkpoint {
                    history.checkpoint(present)
                } else {
                    history.replace(present)
                };

                tracing::debug!(
                    target: TARGET,
                    kind = %inner.kind(),
                    checkpoint,
                    past = next.past().len(),
                    future = next.future().len(),
                    "action applied"
                );

                Ok(next)
            }
        }
    }

    fn undo(history: &History<S>) -> History<S> {
        if !history.can_undo() {
            tracing::trace!(target: TARGET, "undo ignored: past is empty");
        }
        history.undo()
    }

    fn redo(history: &History<S>) -> History<S> {
        if !history.can_redo() {
            tracing::trace!(target: TARGET, "redo ignored: future is empty");
        }
        history.redo()
    }
}

impl<R, S, A> Undoable<R, S, A>
where
    R: Reducer<S, A, Error = Infallible>,
    S: Clone,
    A: Action,
{
    /// Initial envelope of an infallible reducer.
    pub fn initial(&self) -> History<S> {
        match self.init() {
            Ok(history) => history,
            Err(never) => match never {},
        }
    }

    /// Run one transition with an infallible reducer.
    pub fn apply(&self, history: &History<S>, action: &HistoryAction<A>) -> History<S> {
        match self.step(history, action) {
            Ok(history) => history,
            Err(never) => match never {},
        }
    }
}

impl<R, S, A> Reducer<History<S>, HistoryAction<A>> for Undoable<R, S, A>
where
    R: Reducer<S, A>,
    S: Clone,
    A: Action,
{
    type Error = R::Error;

    fn init(&self) -> Result<History<S>, R::Error> {
        Undoable::init(self)
    }

    fn reduce(
        &self,
        state: &History<S>,
        action: &HistoryAction<A>,
    ) -> Result<History<S>, R::Error> {
        self.step(state, action)
    }
}

impl<R: Clone, S, A> Clone for Undoable<R, S, A> {
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            filter: self.filter.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<R: fmt::Debug, S, A> fmt::Debug for Undoable<R, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Undoable")
            .field("reducer", &self.reducer)
            .field("filter", &self.filter)
            .finish()
    }
}

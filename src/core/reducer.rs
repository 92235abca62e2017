//! Inner state-transition functions.
//!
//! A reducer turns the current state and an action into the next state.
//! Reducers given undo/redo capability only need to implement this trait;
//! they never see the history envelope.

use std::convert::Infallible;

/// Pure state-transition function.
///
/// `init` covers the first invocation, when no prior state exists. `reduce`
/// computes the next state from a borrowed current state. Both must be
/// deterministic; a reducer that cannot fail uses `Infallible` as its error.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use undoable::core::Reducer;
///
/// struct Counter;
///
/// impl Reducer<i64, &'static str> for Counter {
///     type Error = Infallible;
///
///     fn init(&self) -> Result<i64, Infallible> {
///         Ok(0)
///     }
///
///     fn reduce(&self, state: &i64, action: &&'static str) -> Result<i64, Infallible> {
///         Ok(match *action {
///             "add" => state + 1,
///             _ => *state,
///         })
///     }
/// }
///
/// assert_eq!(Counter.reduce(&1, &"add"), Ok(2));
/// ```
pub trait Reducer<S, A> {
    /// Error raised by the reducer; propagated unchanged by wrappers.
    type Error;

    /// Produce the state used when there is no prior state.
    fn init(&self) -> Result<S, Self::Error>;

    /// Compute the next state.
    fn reduce(&self, state: &S, action: &A) -> Result<S, Self::Error>;
}

impl<S, A, R: Reducer<S, A> + ?Sized> Reducer<S, A> for &R {
    type Error = R::Error;

    fn init(&self) -> Result<S, Self::Error> {
        (**self).init()
    }

    fn reduce(&self, state: &S, action: &A) -> Result<S, Self::Error> {
        (**self).reduce(state, action)
    }
}

/// Reducer built from a pair of infallible closures.
#[derive(Clone, Copy, Debug)]
pub struct FnReducer<I, F> {
    init: I,
    reduce: F,
}

/// Build a reducer from an initial-state closure and a transition closure.
///
/// # Example
///
/// ```rust
/// use undoable::core::{from_fn, Reducer};
///
/// let counter = from_fn(|| 0, |state: &i32, action: &&str| match *action {
///     "add" => state + 1,
///     _ => *state,
/// });
///
/// assert_eq!(counter.init(), Ok(0));
/// assert_eq!(counter.reduce(&4, &"add"), Ok(5));
/// ```
pub fn from_fn<S, A, I, F>(init: I, reduce: F) -> FnReducer<I, F>
where
    I: Fn() -> S,
    F: Fn(&S, &A) -> S,
{
    FnReducer { init, reduce }
}

impl<S, A, I, F> Reducer<S, A> for FnReducer<I, F>
where
    I: Fn() -> S,
    F: Fn(&S, &A) -> S,
{
    type Error = Infallible;

    fn init(&self) -> Result<S, Infallible> {
        Ok((self.init)())
    }

    fn reduce(&self, state: &S, action: &A) -> Result<S, Infallible> {
        Ok((self.reduce)(state, action))
    }
}

/// Reducer built from a pair of fallible closures.
#[derive(Clone, Copy, Debug)]
pub struct TryFnReducer<I, F> {
    init: I,
    reduce: F,
}

/// Build a reducer from closures that may fail.
///
/// # Example
///
/// ```rust
/// use undoable::core::{try_from_fn, Reducer};
///
/// let checked = try_from_fn(
///     || Ok::<u8, String>(0),
///     |state: &u8, step: &u8| state.checked_add(*step).ok_or_else(|| "overflow".to_string()),
/// );
///
/// assert_eq!(checked.reduce(&250, &5), Ok(255));
/// assert!(checked.reduce(&250, &6).is_err());
/// ```
pub fn try_from_fn<S, A, E, I, F>(init: I, reduce: F) -> TryFnReducer<I, F>
where
    I: Fn() -> Result<S, E>,
    F: Fn(&S, &A) -> Result<S, E>,
{
    TryFnReducer { init, reduce }
}

impl<S, A, E, I, F> Reducer<S, A> for TryFnReducer<I, F>
where
    I: Fn() -> Result<S, E>,
    F: Fn(&S, &A) -> Result<S, E>,
{
    type Error = E;

    fn init(&self) -> Result<S, E> {
        (self.init)()
    }

    fn reduce(&self, state: &S, action: &A) -> Result<S, E> {
        (self.reduce)(state, action)
    }
}

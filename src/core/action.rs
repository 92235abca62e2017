//! Action types understood by the history reducer.
//!
//! Inner reducers consume plain actions identified by a type string. The
//! history reducer wraps those in [`HistoryAction`], which adds the two
//! reserved actions `Undo` and `Redo`.

use std::fmt::Debug;

/// Reserved identifier of the undo action.
pub const UNDO: &str = "UNDO";

/// Reserved identifier of the redo action.
pub const REDO: &str = "REDO";

/// Trait for actions dispatched to a reducer.
///
/// The only thing the history reducer needs from an action is its type
/// identifier, which is matched against the checkpoint filter. Everything
/// else about the action is payload owned by the inner reducer.
///
/// # Example
///
/// ```rust
/// use undoable::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum TodoAction {
///     Add(String),
///     Clear,
/// }
///
/// impl Action for TodoAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Add(_) => "ADD_TODO",
///             Self::Clear => "CLEAR",
///         }
///     }
/// }
///
/// assert_eq!(TodoAction::Add("milk".into()).kind(), "ADD_TODO");
/// ```
pub trait Action: Debug {
    /// Get the action's type identifier.
    fn kind(&self) -> &str;
}

impl Action for String {
    fn kind(&self) -> &str {
        self
    }
}

impl Action for &'static str {
    fn kind(&self) -> &str {
        self
    }
}

/// Action accepted by a history-wrapped reducer.
///
/// `Undo` and `Redo` are handled by the wrapper itself. `Apply` is the
/// default branch: the wrapped action is delegated to the inner reducer,
/// unless its kind is [`UNDO`] or [`REDO`].
///
/// # Example
///
/// ```rust
/// use undoable::core::{Action, HistoryAction};
///
/// let undo: HistoryAction<&str> = HistoryAction::undo();
/// assert_eq!(undo.kind(), "UNDO");
///
/// let add: HistoryAction<&str> = "add".into();
/// assert_eq!(add.kind(), "add");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryAction<A> {
    /// Step back to the most recent past snapshot
    Undo,
    /// Step forward to the nearest future snapshot
    Redo,
    /// Delegate to the inner reducer
    Apply(A),
}

impl<A> HistoryAction<A> {
    /// Zero-payload undo action.
    pub fn undo() -> Self {
        Self::Undo
    }

    /// Zero-payload redo action.
    pub fn redo() -> Self {
        Self::Redo
    }

    /// Wrap a plain action for delegation to the inner reducer.
    pub fn apply(action: A) -> Self {
        Self::Apply(action)
    }
}

impl<A> From<A> for HistoryAction<A> {
    fn from(action: A) -> Self {
        Self::Apply(action)
    }
}

impl<A: Action> Action for HistoryAction<A> {
    fn kind(&self) -> &str {
        match self {
            Self::Undo => UNDO,
            Self::Redo => REDO,
            Self::Apply(action) => action.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increment,
        Set(i32),
    }

    impl Action for TestAction {
        fn kind(&self) -> &str {
            match self {
                Self::Increment => "INCREMENT",
                Self::Set(_) => "SET",
            }
        }
    }

    #[test]
    fn reserved_actions_report_reserved_kinds() {
        assert_eq!(HistoryAction::<TestAction>::undo().kind(), UNDO);
        assert_eq!(HistoryAction::<TestAction>::redo().kind(), REDO);
    }

    #[test]
    fn apply_reports_inner_kind() {
        let action = HistoryAction::apply(TestAction::Set(4));
        assert_eq!(action.kind(), "SET");
        assert_eq!(HistoryAction::from(TestAction::Increment).kind(), "INCREMENT");
    }

    #[test]
    fn from_wraps_in_apply() {
        let action: HistoryAction<TestAction> = TestAction::Set(1).into();
        assert_eq!(action, HistoryAction::Apply(TestAction::Set(1)));
    }

    #[test]
    fn strings_are_their_own_kind() {
        assert_eq!("add".kind(), "add");
        assert_eq!(String::from("noop").kind(), "noop");
    }
}

//! Macros for ergonomic action definitions.

/// Generate an action enum and its `Action` implementation.
///
/// Each variant's type identifier is the variant name, unless an explicit
/// string is given with `= "NAME"`. Variants may carry tuple payloads;
/// payload types must implement `Clone`, `PartialEq` and `Debug`.
///
/// # Example
///
/// ```
/// use undoable::action_enum;
/// use undoable::core::Action;
///
/// action_enum! {
///     pub enum TodoAction {
///         AddTodo(String) = "ADD_TODO",
///         DeleteTodo(u64) = "DELETE_TODO",
///         ClearCompleted,
///     }
/// }
///
/// assert_eq!(TodoAction::AddTodo("milk".into()).kind(), "ADD_TODO");
/// assert_eq!(TodoAction::ClearCompleted.kind(), "ClearCompleted");
/// ```
#[macro_export]
macro_rules! action_enum {
    (@kind $variant:ident $kind:literal) => {
        $kind
    };
    (@kind $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(( $($field:ty),* $(,)? ))? $(= $kind:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(( $($field),* ))?
            ),*
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => $crate::action_enum!(@kind $variant $($kind)?)),*
                }
            }
        }
    };
}

//! Todo list with undo/redo, composed into a larger root state.
//!
//! Only the todo list is undoable; the visibility filter is a plain
//! reducer next to it. Run with `RUST_LOG=undoable=debug` to see every
//! transition.

use std::convert::Infallible;
use tracing_subscriber::EnvFilter;
use undoable::action_enum;
use undoable::core::{History, HistoryAction, Reducer};
use undoable::{make_undoable, Undoable};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Visibility {
    All,
    Active,
    Completed,
}

action_enum! {
    enum AppAction {
        AddTodo(String) = "ADD_TODO",
        DeleteTodo(u64) = "DELETE_TODO",
        CompleteTodo(u64) = "COMPLETE_TODO",
        SetVisibilityFilter(Visibility) = "SET_VISIBILITY_FILTER",
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Todo {
    id: u64,
    text: String,
    completed: bool,
}

struct Todos;

impl Reducer<Vec<Todo>, AppAction> for Todos {
    type Error = Infallible;

    fn init(&self) -> Result<Vec<Todo>, Infallible> {
        Ok(vec![Todo {
            id: 0,
            text: "Use undoable".to_string(),
            completed: false,
        }])
    }

    fn reduce(&self, todos: &Vec<Todo>, action: &AppAction) -> Result<Vec<Todo>, Infallible> {
        let next = match action {
            AppAction::AddTodo(text) => {
                let id = todos.iter().map(|t| t.id + 1).max().unwrap_or(0);
                let mut next = todos.clone();
                next.push(Todo {
                    id,
                    text: text.clone(),
                    completed: false,
                });
                next
            }
            AppAction::DeleteTodo(id) => todos.iter().filter(|t| t.id != *id).cloned().collect(),
            AppAction::CompleteTodo(id) => todos
                .iter()
                .map(|t| Todo {
                    completed: t.completed || t.id == *id,
                    ..t.clone()
                })
                .collect(),
            AppAction::SetVisibilityFilter(_) => todos.clone(),
        };
        Ok(next)
    }
}

#[derive(Debug)]
struct RootState {
    todos: History<Vec<Todo>>,
    visibility: Visibility,
}

struct Root {
    todos: Undoable<Todos, Vec<Todo>, AppAction>,
}

impl Reducer<RootState, HistoryAction<AppAction>> for Root {
    type Error = Infallible;

    fn init(&self) -> Result<RootState, Infallible> {
        Ok(RootState {
            todos: self.todos.initial(),
            visibility: Visibility::All,
        })
    }

    fn reduce(
        &self,
        state: &RootState,
        action: &HistoryAction<AppAction>,
    ) -> Result<RootState, Infallible> {
        let visibility = match action {
            HistoryAction::Apply(AppAction::SetVisibilityFilter(visibility)) => *visibility,
            _ => state.visibility,
        };

        Ok(RootState {
            todos: self.todos.apply(&state.todos, action),
            visibility,
        })
    }
}

fn print_state(label: &str, state: &RootState) {
    let visible: Vec<&str> = state
        .todos
        .present()
        .iter()
        .filter(|t| match state.visibility {
            Visibility::All => true,
            Visibility::Active => !t.completed,
            Visibility::Completed => t.completed,
        })
        .map(|t| t.text.as_str())
        .collect();

    println!(
        "{label:<24} {visible:?} (undo: {}, redo: {}, filter: {:?})",
        state.todos.past().len(),
        state.todos.future().len(),
        state.visibility
    );
}

fn main() -> Result<(), Infallible> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = Root {
        todos: make_undoable(Todos, ["ADD_TODO", "DELETE_TODO", "COMPLETE_TODO"]),
    };

    let actions: Vec<(&str, HistoryAction<AppAction>)> = vec![
        ("add milk", AppAction::AddTodo("Buy milk".into()).into()),
        ("add bread", AppAction::AddTodo("Buy bread".into()).into()),
        ("complete milk", AppAction::CompleteTodo(1).into()),
        (
            "show active",
            AppAction::SetVisibilityFilter(Visibility::Active).into(),
        ),
        ("undo", HistoryAction::undo()),
        ("undo", HistoryAction::undo()),
        ("redo", HistoryAction::redo()),
        ("delete first", AppAction::DeleteTodo(0).into()),
        ("redo (nothing)", HistoryAction::redo()),
        (
            "show completed",
            AppAction::SetVisibilityFilter(Visibility::Completed).into(),
        ),
    ];

    let mut state = root.init()?;
    print_state("initial", &state);

    for (label, action) in &actions {
        state = root.reduce(&state, action)?;
        print_state(label, &state);
    }

    Ok(())
}

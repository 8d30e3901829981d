use super::list::{self, SharedList};
use crate::actions::Action;
use crate::models::Todo;
use std::sync::Arc;

pub type TodoList = Vec<Arc<Todo>>;

/// Reducer for the todo list
///
/// Todos that an action leaves alone keep their `Arc`, and an action that
/// changes nothing hands back the incoming list.
pub fn reduce(state: Option<SharedList<Todo>>, action: &Action) -> SharedList<Todo> {
    let state = state.unwrap_or_default();

    match action {
        Action::AddTodo { todo } => list::append(&state, todo.clone()),
        Action::RemoveTodo { id } => list::remove_where(state, |todo| todo.id == *id),
        Action::ToggleTodo { id } => list::update_where(
            state,
            |todo| todo.id == *id,
            |todo| Todo {
                completed: !todo.completed,
                ..todo.clone()
            },
        ),
        Action::ReceiveData { todos, .. } => list::from_items(todos.iter().cloned()),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{add_goal, add_todo, remove_todo, toggle_todo};

    fn seeded() -> SharedList<Todo> {
        let state = reduce(None, &add_todo(1, "Walk the dog"));
        reduce(Some(state), &add_todo(2, "Wash the car"))
    }

    #[test]
    fn test_default_is_empty() {
        assert!(reduce(None, &Action::Init).is_empty());
    }

    #[test]
    fn test_add_todo() {
        let state = seeded();
        assert_eq!(
            state.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["Walk the dog", "Wash the car"]
        );
    }

    #[test]
    fn test_toggle_todo_flips_only_the_match() {
        let before = seeded();
        let after = reduce(Some(Arc::clone(&before)), &toggle_todo(1));

        assert!(after[0].completed);
        assert!(!after[1].completed);
        assert!(Arc::ptr_eq(&before[1], &after[1]));

        let again = reduce(Some(after), &toggle_todo(1));
        assert!(!again[0].completed);
    }

    #[test]
    fn test_remove_todo() {
        let state = reduce(Some(seeded()), &remove_todo(1));
        assert_eq!(state.len(), 1);
        assert_eq!(state[0].id, 2);
    }

    #[test]
    fn test_unrelated_actions_keep_identity() {
        let before = seeded();
        for action in [add_goal(1, "Run a marathon"), remove_todo(99), toggle_todo(99)] {
            let after = reduce(Some(Arc::clone(&before)), &action);
            assert!(Arc::ptr_eq(&before, &after), "{:?} changed the list", action);
        }
    }
}

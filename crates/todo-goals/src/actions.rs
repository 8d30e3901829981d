use crate::models::{Goal, InitialData, Todo};
use strum::IntoStaticStr;

/// Actions of the todo/goal app
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Dispatched once when the store is created
    Init,
    AddTodo { todo: Todo },
    RemoveTodo { id: u64 },
    ToggleTodo { id: u64 },
    AddGoal { goal: Goal },
    RemoveGoal { id: u64 },
    ReceiveData { todos: Vec<Todo>, goals: Vec<Goal> },
}

impl store_core::Action for Action {
    fn kind(&self) -> &'static str {
        self.into()
    }

    fn bootstrap() -> Self {
        Action::Init
    }
}

pub fn add_todo(id: u64, name: impl Into<String>) -> Action {
    Action::AddTodo {
        todo: Todo {
            id,
            name: name.into(),
            completed: false,
        },
    }
}

pub fn remove_todo(id: u64) -> Action {
    Action::RemoveTodo { id }
}

pub fn toggle_todo(id: u64) -> Action {
    Action::ToggleTodo { id }
}

pub fn add_goal(id: u64, name: impl Into<String>) -> Action {
    Action::AddGoal {
        goal: Goal {
            id,
            name: name.into(),
        },
    }
}

pub fn remove_goal(id: u64) -> Action {
    Action::RemoveGoal { id }
}

pub fn receive_data(data: InitialData) -> Action {
    Action::ReceiveData {
        todos: data.todos,
        goals: data.goals,
    }
}

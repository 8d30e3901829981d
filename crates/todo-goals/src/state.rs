//! Typed access to the todo/goal state tree

use crate::reducers::goals_reducer::GoalList;
use crate::reducers::todos_reducer::TodoList;
use std::sync::Arc;
use store_core::StateTree;

pub const TODOS: &str = "todos";
pub const GOALS: &str = "goals";
pub const LOADING: &str = "loading";

/// Selectors for the slices built by [`root_reducer`](crate::reducer::root_reducer)
pub trait AppStateExt {
    fn todos(&self) -> Arc<TodoList>;
    fn goals(&self) -> Arc<GoalList>;
    fn loading(&self) -> bool;
}

impl AppStateExt for StateTree {
    fn todos(&self) -> Arc<TodoList> {
        self.get::<TodoList>(TODOS).unwrap_or_default()
    }

    fn goals(&self) -> Arc<GoalList> {
        self.get::<GoalList>(GOALS).unwrap_or_default()
    }

    fn loading(&self) -> bool {
        self.get::<bool>(LOADING).is_some_and(|loading| *loading)
    }
}

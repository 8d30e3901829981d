use super::list::{self, SharedList};
use crate::actions::Action;
use crate::models::Goal;
use std::sync::Arc;

pub type GoalList = Vec<Arc<Goal>>;

/// Reducer for the goal list
pub fn reduce(state: Option<SharedList<Goal>>, action: &Action) -> SharedList<Goal> {
    let state = state.unwrap_or_default();

    match action {
        Action::AddGoal { goal } => list::append(&state, goal.clone()),
        Action::RemoveGoal { id } => list::remove_where(state, |goal| goal.id == *id),
        Action::ReceiveData { goals, .. } => list::from_items(goals.iter().cloned()),
        _ => state,
    }
}

use crate::actions::Action;
use std::sync::Arc;

/// Reducer for the loading flag: set until the initial data arrives
pub fn reduce(state: Option<Arc<bool>>, action: &Action) -> Arc<bool> {
    match action {
        Action::ReceiveData { .. } => Arc::new(false),
        _ => state.unwrap_or_else(|| Arc::new(true)),
    }
}

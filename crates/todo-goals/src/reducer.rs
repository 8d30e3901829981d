use crate::actions::Action;
use crate::reducers::{goals_reducer, loading_reducer, todos_reducer};
use crate::state::{GOALS, LOADING, TODOS};
use store_core::{combine_reducers, CombinedReducer};

/// Root reducer: one slice per key of the state tree
pub fn root_reducer() -> CombinedReducer<Action> {
    combine_reducers()
        .slice(TODOS, todos_reducer::reduce)
        .slice(GOALS, goals_reducer::reduce)
        .slice(LOADING, loading_reducer::reduce)
        .build()
}

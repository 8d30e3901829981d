//! Small action/reducer pair shared by the unit tests

use crate::action::Action;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum CounterAction {
    Init,
    Increment,
    Add(i64),
    Push(&'static str),
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            CounterAction::Init => "INIT",
            CounterAction::Increment => "INCREMENT",
            CounterAction::Add(_) => "ADD",
            CounterAction::Push(_) => "PUSH",
        }
    }

    fn bootstrap() -> Self {
        CounterAction::Init
    }
}

pub fn counter(state: Option<i64>, action: &CounterAction) -> i64 {
    let state = state.unwrap_or_default();
    match action {
        CounterAction::Increment => state + 1,
        CounterAction::Add(amount) => state + amount,
        _ => state,
    }
}

pub fn words(state: Option<Arc<Vec<&'static str>>>, action: &CounterAction) -> Arc<Vec<&'static str>> {
    let state = state.unwrap_or_default();
    match action {
        CounterAction::Push(word) => {
            let mut next = Vec::clone(&state);
            next.push(word);
            Arc::new(next)
        }
        _ => state,
    }
}

pub fn total(state: Option<Arc<i64>>, action: &CounterAction) -> Arc<i64> {
    let state = state.unwrap_or_else(|| Arc::new(0));
    match action {
        CounterAction::Increment => Arc::new(*state + 1),
        CounterAction::Add(amount) => Arc::new(*state + amount),
        _ => state,
    }
}

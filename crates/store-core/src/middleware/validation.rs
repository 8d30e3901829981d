//! ValidationMiddleware - rejects actions that fail a rule

use super::{DispatchResult, Middleware, Next, Outcome, Rejection, StoreApi};
use crate::action::Action;

type Rule<S, A> = Box<dyn Fn(&S, &A) -> Result<(), String>>;

/// Runs a rule against the current state and the incoming action.
///
/// `Err(reason)` short-circuits the chain: the action never reaches the
/// reducer and the dispatch reports [`Outcome::Rejected`].
pub struct ValidationMiddleware<S, A> {
    name: &'static str,
    rule: Rule<S, A>,
}

impl<S, A> ValidationMiddleware<S, A> {
    pub fn new<F>(name: &'static str, rule: F) -> Self
    where
        F: Fn(&S, &A) -> Result<(), String> + 'static,
    {
        Self {
            name,
            rule: Box::new(rule),
        }
    }
}

impl<S: Clone, A: Action> Middleware<S, A> for ValidationMiddleware<S, A> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn intercept(&self, api: StoreApi<'_, S, A>, next: Next<'_, S, A>, action: A) -> DispatchResult {
        if let Err(reason) = (self.rule)(&api.get_state(), &action) {
            log::debug!("{}: rejected {}: {}", self.name, action.kind(), reason);
            return Ok(Outcome::Rejected(Rejection {
                middleware: self.name,
                reason,
            }));
        }

        next.run(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::test_support::{counter, CounterAction};
    use std::cell::Cell;
    use std::rc::Rc;

    fn cap(limit: i64) -> ValidationMiddleware<i64, CounterAction> {
        ValidationMiddleware::new("cap", move |state: &i64, action: &CounterAction| match action {
            CounterAction::Increment if *state >= limit => Err(format!("already at {}", limit)),
            _ => Ok(()),
        })
    }

    #[test]
    fn test_rule_sees_current_state() {
        let store = Store::builder(counter).middleware(cap(2)).build();

        assert!(store.dispatch(CounterAction::Increment).unwrap().is_committed());
        assert!(store.dispatch(CounterAction::Increment).unwrap().is_committed());
        let outcome = store.dispatch(CounterAction::Increment).unwrap();

        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection {
                middleware: "cap",
                reason: "already at 2".to_string(),
            })
        );
        assert_eq!(store.get_state(), 2);
    }

    #[test]
    fn test_rejection_notifies_nobody() {
        let store = Store::builder(counter).middleware(cap(0)).build();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _subscription = store.subscribe(move || seen.set(seen.get() + 1));

        store.dispatch(CounterAction::Increment).unwrap();

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_name_is_the_configured_one() {
        let middleware = cap(1);
        assert_eq!(Middleware::<i64, CounterAction>::name(&middleware), "cap");
    }
}

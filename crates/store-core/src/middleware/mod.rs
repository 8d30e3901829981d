//! Middleware system
//!
//! Middleware sits between `dispatch` and the reducer, allowing logging,
//! validation and other cross-cutting concerns to wrap every action without
//! touching reducers or the store.
//!
//! ## Design
//!
//! ```text
//! dispatch → A(before) → B(before) → reducer commit + notify → B(after) → A(after)
//! ```
//!
//! The first middleware in a [`Pipeline`] is the outermost wrapper and sees the
//! action first. Each middleware can:
//! - Inspect the action and current state
//! - Forward the action with [`Next::run`] and look at the outcome
//! - Decline to forward, so the action never reaches the reducer
//! - Dispatch new actions through [`StoreApi::dispatch`] (full chain again)
//!
//! ## Example
//!
//! ```ignore
//! struct AuditMiddleware;
//!
//! impl Middleware<StateTree, Action> for AuditMiddleware {
//!     fn intercept(
//!         &self,
//!         api: StoreApi<'_, StateTree, Action>,
//!         next: Next<'_, StateTree, Action>,
//!         action: Action,
//!     ) -> DispatchResult {
//!         log::info!("before: {:?}", api.get_state());
//!         let outcome = next.run(action);
//!         log::info!("after: {:?}", api.get_state());
//!         outcome
//!     }
//! }
//! ```

use crate::action::Action;
use crate::error::DispatchError;
use crate::store::Inner;

mod logging;
mod validation;

pub use logging::LoggingMiddleware;
pub use validation::ValidationMiddleware;

/// What happened to a dispatched action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reached the reducer, new state committed and listeners notified
    Committed,
    /// A middleware declined to forward it; state untouched, nobody notified
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Committed => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Which middleware short-circuited the chain, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub middleware: &'static str,
    pub reason: String,
}

pub type DispatchResult = Result<Outcome, DispatchError>;

/// Middleware trait - intercepts actions on their way to the reducer
pub trait Middleware<S, A> {
    /// Name used in logs and rejections, defaults to the type name
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Handle an action
    ///
    /// - `api`: read current state, or dispatch through the full chain
    /// - `next`: the rest of the chain, ending in the store's commit
    /// - `action`: the action being dispatched
    ///
    /// Returning without calling `next.run` consumes the action.
    fn intercept(&self, api: StoreApi<'_, S, A>, next: Next<'_, S, A>, action: A)
        -> DispatchResult;
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Store capabilities handed to middleware: read state, dispatch from the top
pub struct StoreApi<'a, S, A> {
    inner: &'a Inner<S, A>,
}

impl<S, A> Clone for StoreApi<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for StoreApi<'_, S, A> {}

impl<S: Clone, A: Action> StoreApi<'_, S, A> {
    pub fn get_state(&self) -> S {
        self.inner.state()
    }

    /// Dispatch through the whole pipeline, starting at the first middleware
    pub fn dispatch(&self, action: A) -> DispatchResult {
        self.inner.dispatch(action)
    }
}

/// The remainder of the middleware chain
pub struct Next<'a, S, A> {
    inner: &'a Inner<S, A>,
    remaining: &'a [Box<dyn Middleware<S, A>>],
}

impl<'a, S: Clone, A: Action> Next<'a, S, A> {
    pub(crate) fn new(inner: &'a Inner<S, A>, chain: &'a [Box<dyn Middleware<S, A>>]) -> Self {
        Self {
            inner,
            remaining: chain,
        }
    }

    /// Forward the action to the next middleware, or to the reducer if none is left
    pub fn run(self, action: A) -> DispatchResult {
        match self.remaining.split_first() {
            Some((middleware, rest)) => middleware.intercept(
                StoreApi { inner: self.inner },
                Next {
                    inner: self.inner,
                    remaining: rest,
                },
                action,
            ),
            None => self.inner.commit(action),
        }
    }
}

/// Ordered middleware chain, fixed once handed to a store
pub struct Pipeline<S, A> {
    middleware: Vec<Box<dyn Middleware<S, A>>>,
}

impl<S, A> Pipeline<S, A> {
    pub fn new() -> Self {
        Self {
            middleware: Vec::new(),
        }
    }

    /// Append middleware; it runs after everything added before it
    pub fn with<M: Middleware<S, A> + 'static>(mut self, middleware: M) -> Self {
        self.add_middleware(middleware);
        self
    }

    pub fn add_middleware<M: Middleware<S, A> + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Middleware names, outermost first
    pub fn names(&self) -> Vec<&'static str> {
        self.middleware.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    pub(crate) fn chain(&self) -> &[Box<dyn Middleware<S, A>>] {
        &self.middleware
    }
}

impl<S, A> Default for Pipeline<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//! Redux-style state container
//!
//! A single cell of application state that only changes through pure reducers,
//! with subscribers notified synchronously after every committed change and a
//! middleware chain wrapped around dispatch.
//!
//! ## Design
//!
//! ```text
//! dispatch(action) → Middleware Chain → Root Reducer → commit → notify listeners
//! ```
//!
//! - [`Reducer`]: pure `(Option<state>, &action) -> state`
//! - [`combine_reducers`]: builds one root reducer over a keyed [`StateTree`]
//! - [`Middleware`] / [`Pipeline`]: ordered interceptors around the commit
//! - [`Store`]: owns the state and the listener registry
//!
//! ## Example
//!
//! ```ignore
//! let store = Store::builder(root_reducer())
//!     .middleware(LoggingMiddleware::new())
//!     .build();
//!
//! let subscription = store.subscribe(|| log::info!("state changed"));
//! store.dispatch(Action::Increment)?;
//! subscription.unsubscribe();
//! ```
//!
//! The store is single-threaded (`Rc`/`RefCell` inside) and dispatch always runs
//! to completion before returning.

pub mod action;
pub mod combine;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use action::Action;
pub use combine::{combine_reducers, CombineReducers, CombinedReducer, Slice, StateTree};
pub use error::DispatchError;
pub use middleware::{
    DispatchResult, LoggingMiddleware, Middleware, Next, Outcome, Pipeline, Rejection, StoreApi,
    ValidationMiddleware,
};
pub use reducer::Reducer;
pub use store::{create_store, create_store_with, Store, StoreBuilder, Subscription, WeakStore};

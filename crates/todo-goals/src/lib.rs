//! Todo/goal state built on store-core
//!
//! Provides the actions, slice reducers and middleware of the todo/goal app,
//! and assembles them into a store according to [`AppConfig`].

pub mod actions;
pub mod checker;
pub mod logger;
pub mod models;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use models::{Goal, InitialData, Todo};
pub use state::AppStateExt;
pub use store::{build_store, AppStore};
pub use todo_goals_config::AppConfig;

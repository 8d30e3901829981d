//! LoggingMiddleware - logs every action and how it ended

use super::{DispatchResult, Middleware, Next, Outcome, StoreApi};
use crate::action::Action;
use log::Level;
use std::fmt::Debug;

/// LoggingMiddleware - logs all actions passing through
///
/// Logs the action before forwarding it and the outcome afterwards. Place it
/// after validating middleware if rejected actions should not show up, before
/// it to see rejections too.
pub struct LoggingMiddleware {
    level: Level,
    log_state: bool,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            log_state: false,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Also dump the committed state after each action
    pub fn with_state(mut self, log_state: bool) -> Self {
        self.log_state = log_state;
        self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Middleware<S, A> for LoggingMiddleware
where
    S: Clone + Debug,
    A: Action,
{
    fn intercept(&self, api: StoreApi<'_, S, A>, next: Next<'_, S, A>, action: A) -> DispatchResult {
        let kind = action.kind();
        log::log!(self.level, "Action: {:?}", action);

        let result = next.run(action);

        match &result {
            Ok(Outcome::Committed) if self.log_state => {
                log::log!(self.level, "{} committed, state: {:?}", kind, api.get_state());
            }
            Ok(Outcome::Committed) => log::log!(self.level, "{} committed", kind),
            Ok(Outcome::Rejected(rejection)) => log::log!(
                self.level,
                "{} rejected by {}: {}",
                kind,
                rejection.middleware,
                rejection.reason
            ),
            Err(e) => log::error!("{} failed: {}", kind, e),
        }

        result
    }
}

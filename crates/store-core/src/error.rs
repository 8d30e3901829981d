use thiserror::Error;

/// Errors surfaced by [`Store::dispatch`](crate::Store::dispatch)
///
/// A middleware declining an action is not an error, see
/// [`Outcome::Rejected`](crate::Outcome::Rejected).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("`{action}` was dispatched while a reducer was running")]
    DispatchDuringReduce { action: &'static str },

    #[error("middleware `{middleware}` failed on `{action}`: {source}")]
    Middleware {
        middleware: &'static str,
        action: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    pub fn middleware(
        middleware: &'static str,
        action: &'static str,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Middleware {
            middleware,
            action,
            source: source.into(),
        }
    }
}

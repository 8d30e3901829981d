use crate::actions::Action;
use crate::checker::checker;
use crate::reducer::root_reducer;
use anyhow::Result;
use log::Level;
use store_core::{create_store_with, LoggingMiddleware, Pipeline, StateTree, Store};
use todo_goals_config::AppConfig;

pub type AppStore = Store<StateTree, Action>;

/// Assemble the todo/goal store with the middleware the config asks for
pub fn build_store(config: &AppConfig) -> Result<AppStore> {
    let checker = checker(&config.blocked_terms)?;
    let mut pipeline = Pipeline::new();

    if config.log_actions {
        let logger = LoggingMiddleware::new()
            .with_level(parse_level(&config.log_level))
            .with_state(config.log_state);

        // Order decides whether rejected actions show up in the log
        if config.reject_before_logging {
            pipeline.add_middleware(checker);
            pipeline.add_middleware(logger);
        } else {
            pipeline.add_middleware(logger);
            pipeline.add_middleware(checker);
        }
    } else {
        pipeline.add_middleware(checker);
    }

    let store = create_store_with(root_reducer(), pipeline);
    log::info!("Store ready, middleware: {:?}", store.middleware_names());
    Ok(store)
}

fn parse_level(level: &str) -> Level {
    level.parse().unwrap_or_else(|_| {
        log::warn!("Unknown log level {:?}, using debug", level);
        Level::Debug
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info"), Level::Info);
        assert_eq!(parse_level("TRACE"), Level::Trace);
        assert_eq!(parse_level("loud"), Level::Debug);
    }

    #[test]
    fn test_middleware_order_follows_config() {
        let store = build_store(&AppConfig::default()).unwrap();
        assert_eq!(store.middleware_names(), vec!["checker", "LoggingMiddleware"]);

        let config = AppConfig {
            reject_before_logging: false,
            ..AppConfig::default()
        };
        let store = build_store(&config).unwrap();
        assert_eq!(store.middleware_names(), vec!["LoggingMiddleware", "checker"]);

        let config = AppConfig {
            log_actions: false,
            ..AppConfig::default()
        };
        let store = build_store(&config).unwrap();
        assert_eq!(store.middleware_names(), vec!["checker"]);
    }
}

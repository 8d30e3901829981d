//! Blocked-terms checker
//!
//! Refuses ADD_TODO and ADD_GOAL actions whose name mentions a blocked term.
//! The action never reaches the reducers and the dispatch reports a rejection.

use crate::actions::Action;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use store_core::{StateTree, ValidationMiddleware};

pub const CHECKER: &str = "checker";

pub fn checker(blocked_terms: &[String]) -> Result<ValidationMiddleware<StateTree, Action>> {
    let pattern = blocked_pattern(blocked_terms)?;

    Ok(ValidationMiddleware::new(
        CHECKER,
        move |_state: &StateTree, action: &Action| {
            let Some(pattern) = &pattern else {
                return Ok(());
            };
            let name = match action {
                Action::AddTodo { todo } => &todo.name,
                Action::AddGoal { goal } => &goal.name,
                _ => return Ok(()),
            };
            match pattern.find(name) {
                Some(found) => Err(format!(
                    "Nope. \"{}\" mentions \"{}\", that's a bad idea.",
                    name,
                    found.as_str()
                )),
                None => Ok(()),
            }
        },
    ))
}

/// Case-insensitive alternation of the terms, `None` when there is nothing to block
fn blocked_pattern(terms: &[String]) -> Result<Option<Regex>> {
    let escaped: Vec<String> = terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(regex::escape)
        .collect();

    if escaped.is_empty() {
        return Ok(None);
    }

    RegexBuilder::new(&escaped.join("|"))
        .case_insensitive(true)
        .build()
        .map(Some)
        .context("Invalid blocked terms")
}

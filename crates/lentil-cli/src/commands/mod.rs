//! Command implementations and dispatch logic.
//!
//! This module contains all command handlers and the central dispatch
//! system. Each command is implemented as a function that takes the parsed
//! arguments and a CommandContext.

use lentil_core::error::{LentilError, LentilResult};
use lentil_core::CoercionMap;
use tracing::info;

pub mod check;
pub mod lines;
pub mod show;

#[cfg(test)]
mod tests;

use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        Self {
            output: OutputHandler::new(),
        }
    }
}

/// Dispatch a command to its handler
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> LentilResult<()> {
    match command {
        Commands::Show {
            file,
            separator,
            coerce,
            json,
            out,
        } => {
            info!("Showing parameters from {}", file);
            let plan = parse_plan(&coerce)?;
            show::execute(&file, &separator, plan.as_ref(), json, out.as_deref(), ctx)
        },
        Commands::Check {
            file,
            separator,
            coerce,
            require,
        } => {
            info!("Checking parameters from {}", file);
            let plan = parse_plan(&coerce)?;
            check::execute(&file, &separator, plan.as_ref(), &require, ctx)
        },
        Commands::Lines { file } => {
            info!("Listing lines from {}", file);
            lines::execute(&file)
        },
    }
}

/// Build a conversion plan from `KEY=TAG` command line pairs.
///
/// Rejected before any file is opened: a pair without `=`, and any tag
/// outside the recognized set.
fn parse_plan(pairs: &[String]) -> LentilResult<Option<CoercionMap>> {
    if pairs.is_empty() {
        return Ok(None);
    }

    let mut plan = CoercionMap::new();
    for pair in pairs {
        let Some((key, tag)) = pair.split_once('=') else {
            return Err(LentilError::UnknownCoercion { tag: pair.clone() });
        };
        plan.insert(key.to_string(), tag.parse()?);
    }

    Ok(Some(plan))
}

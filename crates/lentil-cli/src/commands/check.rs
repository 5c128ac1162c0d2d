//! `lentil check` command implementation.
//!
//! Parses a parameter file (optionally re-typing keys) and verifies that
//! every `--require`d key is present. A missing optional key is a normal
//! outcome; a missing required key fails the command.

use camino::Utf8Path;
use lentil_core::error::{LentilError, LentilResult};
use lentil_core::CoercionMap;
use lentil_params::read_params;

use super::CommandContext;

/// Execute the `lentil check` command
pub fn execute(
    file: &Utf8Path,
    separator: &str,
    plan: Option<&CoercionMap>,
    require: &[String],
    ctx: &CommandContext,
) -> LentilResult<()> {
    let (params, lines) = read_params(file, separator, plan)?;

    ctx.output.info(&format!(
        "{}: {} lines, {} distinct keys",
        file,
        lines.len(),
        params.len()
    ));

    let mut missing = Vec::new();
    for key in require {
        match params.get(key) {
            Some(value) => {
                ctx.output.success(&format!("{}{}{}", key, separator, value));
            },
            None => {
                ctx.output.error(&format!("{} is not defined", key));
                missing.push(key.clone());
            },
        }
    }

    if let Some(key) = missing.into_iter().next() {
        return Err(LentilError::UnknownKey { key });
    }

    ctx.output.success("Parameter file is valid");
    Ok(())
}

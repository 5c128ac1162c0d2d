//! `lentil show` command implementation.
//!
//! Parses a parameter file (optionally re-typing keys) and prints the
//! mapping, either in its line form or as JSON. With `--out` the rendering
//! goes to a file, creating the parent folder first.

use camino::Utf8Path;
use lentil_core::error::{LentilError, LentilResult};
use lentil_core::utils::ensure_folder;
use lentil_core::CoercionMap;
use lentil_params::read_params;
use std::fs;
use tracing::debug;

use super::CommandContext;

/// Execute the `lentil show` command
pub fn execute(
    file: &Utf8Path,
    separator: &str,
    plan: Option<&CoercionMap>,
    json: bool,
    out: Option<&Utf8Path>,
    ctx: &CommandContext,
) -> LentilResult<()> {
    let (params, lines) = read_params(file, separator, plan)?;
    debug!("{} lines, {} distinct keys", lines.len(), params.len());

    let rendered = if json {
        let mut text = serde_json::to_string_pretty(&params).map_err(|e| {
            LentilError::Serialize {
                message: e.to_string(),
            }
        })?;
        text.push('\n');
        text
    } else {
        params.render(separator)
    };

    match out {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                ensure_folder(parent)?;
            }
            fs::write(out_path, &rendered)
                .map_err(|e| LentilError::io(format!("Failed to write {}", out_path), e))?;
            ctx.output
                .success(&format!("Wrote {} parameters to {}", params.len(), out_path));
        },
        None => {
            print!("{}", rendered);
        },
    }

    Ok(())
}

//! `lentil lines` command implementation.

use camino::Utf8Path;
use lentil_core::error::LentilResult;
use lentil_params::lines_of;
use tracing::debug;

/// Execute the `lentil lines` command: print the file as a plain manifest
pub fn execute(file: &Utf8Path) -> LentilResult<()> {
    let entries = lines_of(file)?;
    debug!("{} manifest entries", entries.len());

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}

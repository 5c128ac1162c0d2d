//! Text-line reading of parameter files.

use crate::coerce;
use crate::params::Params;
use crate::ParamsResult;
use camino::Utf8Path;
use lentil_core::error::LentilError;
use lentil_core::{CoercionMap, Value};

/// Read a parameter file into a mapping plus the raw line sequence.
///
/// Each line is split on the first occurrence of `separator`; the text
/// before it becomes the key (taken verbatim) and the text after it, with
/// trailing whitespace stripped, becomes the value. A later line with an
/// already-seen key overwrites the earlier value. When `plan` is given the
/// coercion engine runs over the mapping before it is returned.
///
/// A line without the separator (blank lines included) fails the whole call
/// with [`LentilError::MalformedLine`]; no partial mapping is returned.
pub fn read_params(
    path: &Utf8Path,
    separator: &str,
    plan: Option<&CoercionMap>,
) -> ParamsResult<(Params, Vec<String>)> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LentilError::io(format!("Failed to read {}", path), e))?;

    let (mut params, lines) = parse_params(&content, separator, path.as_str())?;

    if let Some(plan) = plan {
        coerce::apply(&mut params, plan)?;
    }

    Ok((params, lines))
}

/// Split file content into the mapping and the trimmed line sequence
fn parse_params(content: &str, separator: &str, path: &str) -> ParamsResult<(Params, Vec<String>)> {
    let mut params = Params::new();
    let mut lines = Vec::new();

    for (index, line) in content.lines().enumerate() {
        lines.push(line.trim().to_string());

        let Some((key, value)) = line.split_once(separator) else {
            return Err(LentilError::MalformedLine {
                path: path.to_string(),
                line: index + 1,
                separator: separator.to_string(),
                text: line.to_string(),
            });
        };

        // The key is taken verbatim; only trailing whitespace comes off the value
        params.insert(key.to_string(), Value::Raw(value.trim_end().to_string()));
    }

    Ok((params, lines))
}

/// Read a text file into one trimmed string per line.
///
/// Used for unstructured manifests (one identifier per line) rather than
/// key/value parameter files.
pub fn lines_of(path: &Utf8Path) -> ParamsResult<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LentilError::io(format!("Failed to read {}", path), e))?;

    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

//! Unit tests for CLI commands.

use super::*;
use camino::Utf8PathBuf;
use lentil_core::Coercion;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Write a parameter file fixture and return its path
fn write_params_file(content: &str) -> (NamedTempFile, Utf8PathBuf) {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).unwrap();
    let path = Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();
    (file, path)
}

#[test]
fn test_parse_plan_empty_is_none() {
    assert!(parse_plan(&[]).unwrap().is_none());
}

#[test]
fn test_parse_plan_builds_ordered_map() {
    let pairs = [
        "scales=float".to_string(),
        "shuffle=boolean".to_string(),
        "classes=list".to_string(),
        "sizes=int".to_string(),
    ];

    let plan = parse_plan(&pairs).unwrap().unwrap();
    assert_eq!(plan.len(), 4);
    assert_eq!(plan.get("scales"), Some(&Coercion::Float));
    assert_eq!(plan.get("shuffle"), Some(&Coercion::Boolean));

    let keys: Vec<&String> = plan.keys().collect();
    assert_eq!(keys, ["scales", "shuffle", "classes", "sizes"]);
}

#[test]
fn test_parse_plan_rejects_unknown_tag() {
    let err = parse_plan(&["scales=double".to_string()]).unwrap_err();
    assert!(matches!(
        err,
        LentilError::UnknownCoercion { tag } if tag == "double"
    ));
}

#[test]
fn test_parse_plan_rejects_pair_without_equals() {
    let err = parse_plan(&["scales".to_string()]).unwrap_err();
    assert!(matches!(
        err,
        LentilError::UnknownCoercion { tag } if tag == "scales"
    ));
}

#[test]
fn test_show_writes_rendering_to_out_path() {
    let (_guard, params_path) = write_params_file("mode: train\nscales: 0.5, 1.5\n");
    let out_dir = TempDir::new().unwrap();
    let out_path = Utf8PathBuf::try_from(out_dir.path().to_path_buf())
        .unwrap()
        .join("reports")
        .join("params.txt");

    let ctx = CommandContext::new();
    show::execute(&params_path, ": ", None, false, Some(&out_path), &ctx).unwrap();

    // The parent folder is created on demand
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, "mode: train\nscales: 0.5, 1.5\n");
}

#[test]
fn test_show_json_output_is_typed() {
    let (_guard, params_path) = write_params_file("mode: train\nscales: 0.5, 1.5\nshuffle: True\n");
    let out_dir = TempDir::new().unwrap();
    let out_path = Utf8PathBuf::try_from(out_dir.path().to_path_buf())
        .unwrap()
        .join("params.json");

    let plan = parse_plan(&[
        "scales=float".to_string(),
        "shuffle=boolean".to_string(),
    ])
    .unwrap();

    let ctx = CommandContext::new();
    show::execute(
        &params_path,
        ": ",
        plan.as_ref(),
        true,
        Some(&out_path),
        &ctx,
    )
    .unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["mode"], "train");
    assert_eq!(parsed["scales"][1], 1.5);
    assert_eq!(parsed["shuffle"], true);
}

#[test]
fn test_check_passes_when_required_keys_exist() {
    let (_guard, params_path) = write_params_file("mode: train\nepochs: 40\n");
    let ctx = CommandContext::new();

    let result = check::execute(
        &params_path,
        ": ",
        None,
        &["mode".to_string(), "epochs".to_string()],
        &ctx,
    );
    assert!(result.is_ok());
}

#[test]
fn test_check_fails_on_missing_required_key() {
    let (_guard, params_path) = write_params_file("mode: train\n");
    let ctx = CommandContext::new();

    let err = check::execute(&params_path, ": ", None, &["epochs".to_string()], &ctx).unwrap_err();
    assert!(matches!(err, LentilError::UnknownKey { key } if key == "epochs"));
}

#[test]
fn test_check_with_no_required_keys_just_parses() {
    let (_guard, params_path) = write_params_file("mode: train\n");
    let ctx = CommandContext::new();

    assert!(check::execute(&params_path, ": ", None, &[], &ctx).is_ok());
}

#[test]
fn test_lines_command_reads_manifest() {
    let (_guard, manifest_path) = write_params_file("img_001\nimg_002\n");
    assert!(lines::execute(&manifest_path).is_ok());
}

#[test]
fn test_lines_command_fails_on_missing_file() {
    let missing = Utf8PathBuf::from("/nonexistent/manifest.txt");
    assert!(matches!(
        lines::execute(&missing).unwrap_err(),
        LentilError::Io { .. }
    ));
}

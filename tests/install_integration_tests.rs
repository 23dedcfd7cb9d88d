//! Integration tests for template installation through the library API.

use std::collections::HashSet;
use std::path::PathBuf;

use easy_sm::config::ConfigManager;
use easy_sm::constants::{MODULE_NAME, PACKAGE_MARKER};
use easy_sm::error::Error;
use easy_sm::template::{install_with_config_path, TEMPLATE_ENTRIES};
use walkdir::WalkDir;

#[test]
fn fresh_install_produces_exactly_the_template_tree() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let output_dir = tmp_dir.path().join("demo");
    let config_path = tmp_dir.path().join("demo.json");

    install_with_config_path("demo", "default", "us-east-1", &output_dir, "env", &config_path)
        .unwrap();

    let mut expected: HashSet<PathBuf> = TEMPLATE_ENTRIES
        .iter()
        .map(|entry| PathBuf::from(entry.relative_path))
        .collect();
    expected.insert(PathBuf::from(PACKAGE_MARKER));

    let installed: HashSet<PathBuf> = WalkDir::new(&output_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(&output_dir).unwrap().to_path_buf())
        .collect();

    assert_eq!(installed, expected);

    for entry in TEMPLATE_ENTRIES {
        let content = std::fs::read_to_string(output_dir.join(entry.relative_path)).unwrap();
        assert_eq!(content, entry.content, "content mismatch for {}", entry.relative_path);
    }
}

#[test]
fn install_writes_the_expected_config_json() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let output_dir = tmp_dir.path().join("demo");
    let config_path = tmp_dir.path().join("demo.json");

    install_with_config_path("demo", "default", "us-east-1", &output_dir, "env", &config_path)
        .unwrap();

    let raw = std::fs::read_to_string(&config_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "image_name": "demo",
            "aws_profile": "default",
            "aws_region": "us-east-1",
            "easy_sm_module_dir": output_dir.display().to_string(),
            "renv_dir": "env",
        })
    );

    // And the manager reads back the same record.
    let config = ConfigManager::new(&config_path).get_config().unwrap();
    assert_eq!(config.image_name, "demo");
    assert_eq!(config.renv_dir, "env");
}

#[test]
fn conflicting_module_aborts_without_writing() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let output_dir = tmp_dir.path().join("demo");
    let config_path = tmp_dir.path().join("demo.json");
    std::fs::create_dir_all(output_dir.join(MODULE_NAME)).unwrap();

    let err = install_with_config_path(
        "demo", "default", "us-east-1", &output_dir, "env", &config_path,
    )
    .unwrap_err();

    assert!(matches!(err, Error::ModuleExistsError { .. }));
    assert!(!config_path.exists());
    assert!(!output_dir.join(PACKAGE_MARKER).exists());

    // The pre-existing module directory is the only thing in the output dir.
    let leftover: Vec<_> = WalkDir::new(&output_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .collect();
    assert!(leftover.is_empty());
}

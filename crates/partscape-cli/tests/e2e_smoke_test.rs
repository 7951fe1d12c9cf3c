use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use partscape_cli::{Args, View};

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path, view: View) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        explode: 0.5,
        blueprint: false,
        selected: Some(0),
        view,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_json_files(demos_dir());
    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let output_path = temp_dir
            .path()
            .join(demo.file_name().expect("demo has a file name"));

        match partscape_cli::run(&args(demo, &output_path, View::Both)) {
            Ok(()) => {
                let json = fs::read_to_string(&output_path).expect("output written");
                let value: serde_json::Value =
                    serde_json::from_str(&json).expect("output is valid JSON");
                assert!(value["scene"]["parts"].is_array(), "{}", demo.display());
                assert!(value["diagram"]["nodes"].is_array(), "{}", demo.display());
            }
            Err(e) => failed.push((demo.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo in &error_demos {
        let output_path = temp_dir.path().join("error_output.json");

        if partscape_cli::run(&args(demo, &output_path, View::Both)).is_ok() {
            unexpectedly_succeeded.push(demo.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_diagram_only_view() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("diagram.json");
    let input = demos_dir().join("sensor_node.json");

    partscape_cli::run(&args(&input, &output_path, View::Diagram)).expect("run succeeds");

    let json = fs::read_to_string(&output_path).expect("output written");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert!(value.get("scene").is_none());
    assert_eq!(value["diagram"]["nodes"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["diagram"]["edges"].as_array().map(Vec::len), Some(5));
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.json");
    let output_path = temp_dir.path().join("out.json");

    assert!(partscape_cli::run(&args(&missing, &output_path, View::Both)).is_err());
}

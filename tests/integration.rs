// End-to-end tests drive the compiled binary inside a scratch directory.
// Scenarios that provision a real virtual environment probe for python3
// first and skip when the interpreter is unavailable.
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn python3_available() -> bool {
    std::process::Command::new("python3")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn steier() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("steier").unwrap()
}

fn tree_snapshot(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.path().to_path_buf())
        .collect();

    paths.sort();
    paths
}

#[test]
fn scaffolds_a_new_project_from_the_stdin_prompt() {
    if !python3_available() {
        eprintln!("python3 not found; skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();

    let mut cmd = steier();
    cmd.current_dir(dir.path()).write_stdin("demo\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enter the project name:"));

    let root = dir.path().join("demo");

    assert!(root.join("storage/data/.gitkeep").is_file());
    assert!(root.join("storage/logs/.gitkeep").is_file());
    assert!(root.join("storage/logs/scaffold.log").is_file());
    assert!(root.join("venv").is_dir());
    assert!(root.join("scripts").is_dir());
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# demo\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("Makefile")).unwrap(),
        "# Makefile\n"
    );

    let entry_point = root.join("src/main.py");
    assert!(entry_point.is_file());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(&entry_point).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    // the generated entry point actually runs
    let output = std::process::Command::new("python3")
        .arg(&entry_point)
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("Hello, world!"));
}

#[test]
fn rejects_a_blank_project_name() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = steier();
    cmd.current_dir(dir.path()).write_stdin("   \n");

    cmd.assert().failure().code(1);

    // nothing was created, not even a log file
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn rejects_end_of_input_without_a_name() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = steier();
    cmd.current_dir(dir.path());

    cmd.assert().failure().code(1);

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn rerunning_leaves_existing_files_untouched() {
    if !python3_available() {
        eprintln!("python3 not found; skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("demo");

    steier()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .success();

    let before = tree_snapshot(&root);
    let readme_before = fs::read_to_string(root.join("README.md")).unwrap();
    let entry_point_before = fs::read_to_string(root.join("src/main.py")).unwrap();

    steier()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(tree_snapshot(&root), before);
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        readme_before
    );
    assert_eq!(
        fs::read_to_string(root.join("src/main.py")).unwrap(),
        entry_point_before
    );
}

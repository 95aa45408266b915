use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Helper function to create test files
fn create_test_files(dir: impl AsRef<Path>, files: &[(&str, &str)]) -> Result<()> {
    for (name, content) in files {
        fs::write(dir.as_ref().join(name), content)?;
    }
    Ok(())
}

#[test]
fn test_scan_writes_artifacts() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(
        &dir,
        &[
            ("a.txt", "first Adi line\nnothing\n"),
            ("b.txt", "Adi one\nAdi two\n"),
            ("c.txt", "no matches here\n"),
        ],
    )?;

    let results = dir.path().join("out.txt");
    let log = dir.path().join("out.log");

    Command::cargo_bin("linehound")?
        .arg("Adi")
        .arg("--dir")
        .arg(dir.path())
        .arg("--results-file")
        .arg(&results)
        .arg("--log-file")
        .arg(&log)
        .arg("--threads")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Searched files: 3"))
        .stdout(predicate::str::contains("Files with pattern: 2"))
        .stdout(predicate::str::contains("Pattern occurrences: 3"))
        .stdout(predicate::str::contains("Used threads: 2"));

    let results_content = fs::read_to_string(&results)?;
    assert!(results_content.contains(":6: first Adi line"));
    assert!(results_content.contains(":0: Adi one"));
    assert!(results_content.contains(":0: Adi two"));
    assert!(!results_content.contains("no matches here"));

    let log_content = fs::read_to_string(&log)?;
    // One ranked line per worker, each listing bare file names
    assert_eq!(log_content.lines().count(), 2);
    for name in ["a.txt", "b.txt", "c.txt"] {
        assert_eq!(log_content.matches(name).count(), 1);
    }
    Ok(())
}

#[test]
fn test_stats_only_skips_artifacts() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("a.txt", "one Adi\n")])?;

    let results = dir.path().join("out.txt");
    let log = dir.path().join("out.log");

    Command::cargo_bin("linehound")?
        .arg("Adi")
        .arg("--dir")
        .arg(dir.path())
        .arg("--results-file")
        .arg(&results)
        .arg("--log-file")
        .arg(&log)
        .arg("--stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files with pattern: 1"))
        .stdout(predicate::str::contains("Result file:").not());

    assert!(!results.exists());
    assert!(!log.exists());
    Ok(())
}

#[test]
fn test_pattern_is_required() -> Result<()> {
    Command::cargo_bin("linehound")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn test_empty_tree_is_an_error() -> Result<()> {
    let dir = tempdir()?;

    Command::cargo_bin("linehound")?
        .arg("Adi")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files to scan"));
    Ok(())
}

#[test]
fn test_config_file_supplies_pattern_defaults() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("a.txt", "needle in here\n")])?;

    let config = dir.path().join("config.yaml");
    fs::write(
        &config,
        format!(
            "root_path: \"{}\"\nstats_only: true\n",
            dir.path().display()
        ),
    )?;

    Command::cargo_bin("linehound")?
        .arg("needle")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files with pattern: 1"));
    Ok(())
}

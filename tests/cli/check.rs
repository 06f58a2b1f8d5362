use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, noise_files};

const NOISY_PROJECT: &[&str] = &[
    "debug.log",
    "tmp/output.txt",
    ".vscode/settings.json",
    "index.js",
    "README.md",
];

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_files(&["index.js", "src/lib.rs"])?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\u{2713} Scanned 3 entries - no noise detected\n"
    );
    assert_eq!(test.read_file("noise.txt")?, "\u{2705} No noise detected.");

    Ok(())
}

#[test]
fn test_noisy_project() -> Result<()> {
    let test = CliTest::with_files(NOISY_PROJECT)?;

    let output = test.check_command().output()?;
    assert!(output.status.success());

    let report = test.read_file("noise.txt")?;
    assert_snapshot!(report, @r"
    ⚠️ Found 3 potentially superfluous files:
    - (root) (3 files: .vscode, debug.log, tmp)

    🧹 Consider removing them if they are not needed.
    ");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("\u{2718} Found potentially superfluous files/directories:"));
    assert!(stdout.contains(&report));

    Ok(())
}

#[test]
fn test_grouping_options() -> Result<()> {
    let test = CliTest::with_files(&[
        "logs/debug1.log",
        "logs/debug2.log",
        "logs/debug3.log",
        "logs/debug4.log",
        "single.tmp",
    ])?;

    test.check_command()
        .args(["--max-files-per-dir", "2", "--group-threshold", "4"])
        .output()?;

    assert_snapshot!(test.read_file("noise.txt")?, @r"
    ⚠️ Found 5 potentially superfluous files:
    - single.tmp
    - logs/ (4 files: debug1.log, debug2.log... and 2 more)

    🧹 Consider removing them if they are not needed.
    ");

    Ok(())
}

#[test]
fn test_options_from_environment() -> Result<()> {
    let test = CliTest::with_files(&["logs/a.log", "logs/b.log"])?;

    test.check_command()
        .env("INPUT_GROUP-THRESHOLD", "2")
        .output()?;

    assert!(
        test.read_file("noise.txt")?
            .contains("- logs/ (2 files: a.log, b.log)")
    );

    Ok(())
}

#[test]
fn test_invalid_option() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .check_command()
        .args(["--max-files-per-dir", "0"])
        .output()?;

    assert!(!output.status.success());
    assert!(!test.root().join("noise.txt").exists());

    Ok(())
}

#[test]
fn test_deny_fails_on_noise() -> Result<()> {
    let test = CliTest::with_files(NOISY_PROJECT)?;

    let output = test.check_command().arg("--deny").output()?;
    assert_eq!(output.status.code(), Some(1));

    test.remove("debug.log")?;
    test.remove("tmp")?;
    test.remove(".vscode")?;

    let output = test.check_command().arg("--deny").output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_ignore_file() -> Result<()> {
    let test = CliTest::with_files(NOISY_PROJECT)?;
    test.write_file(".pr-noise-ignore", "# Ignore debug files\ndebug.log\ntmp\n")?;

    test.check_command()
        .args(["--output-file", "outputs.txt"])
        .output()?;

    assert_eq!(noise_files(&test.read_file("outputs.txt")?)?, vec![".vscode"]);

    Ok(())
}

#[test]
fn test_custom_ignore_file() -> Result<()> {
    let test = CliTest::with_files(&["scratch.js", "experiments/test.js", "debug.log"])?;
    test.write_file(".test-ignore", "scratch.*\nexperiments*")?;

    test.check_command()
        .args(["--ignore-file", ".test-ignore", "--output-file", "outputs.txt"])
        .output()?;

    assert_eq!(noise_files(&test.read_file("outputs.txt")?)?, vec!["debug.log"]);

    Ok(())
}

#[test]
fn test_explicit_ignores() -> Result<()> {
    let test = CliTest::with_files(NOISY_PROJECT)?;

    test.check_command()
        .args(["--ignore", "debug.log", "--ignore", "tmp"])
        .args(["--output-file", "outputs.txt"])
        .output()?;

    assert_eq!(noise_files(&test.read_file("outputs.txt")?)?, vec![".vscode"]);

    Ok(())
}

#[test]
fn test_outputs_file() -> Result<()> {
    let test = CliTest::with_files(&["notes.bak", "main.rs"])?;

    test.check_command()
        .env("GITHUB_OUTPUT", "gh-output")
        .output()?;

    assert_eq!(
        test.read_file("gh-output")?,
        "noise-found=true\nnoise-files=[\"notes.bak\"]\n"
    );

    Ok(())
}

#[test]
fn test_nested_root_prunes_tooling_dir() -> Result<()> {
    let test = CliTest::with_files(&["a/node_modules/x.js", "a/node_modules/pkg/debug.log"])?;

    test.check_command()
        .args(["--root", "a", "--output-file", "outputs.txt"])
        .output()?;

    assert_eq!(
        noise_files(&test.read_file("outputs.txt")?)?,
        vec!["a/node_modules"]
    );

    Ok(())
}

#[test]
fn test_nested_root_reported_paths_can_be_ignored() -> Result<()> {
    let test = CliTest::with_files(&["a/debug.log", "a/trace.log", "a/notes.bak", "a/main.rs"])?;
    test.write_file(".pr-noise-ignore", "a/trace.log\n")?;

    test.check_command()
        .args(["--root", "a", "--ignore", "a/debug.log"])
        .args(["--output-file", "outputs.txt"])
        .output()?;

    assert_eq!(
        noise_files(&test.read_file("outputs.txt")?)?,
        vec!["a/notes.bak"]
    );

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().args(["--root", "missing"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.starts_with("Error: Failed to check missing"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}

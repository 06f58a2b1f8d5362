use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_init_creates_ignore_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\u{2713} Created .pr-noise-ignore\n"
    );
    let content = test.read_file(".pr-noise-ignore")?;
    assert!(content.lines().all(|l| l.is_empty() || l.starts_with('#')));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".pr-noise-ignore", "debug.log\n")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        "Error: .pr-noise-ignore already exists\n"
    );
    assert_eq!(test.read_file(".pr-noise-ignore")?, "debug.log\n");

    Ok(())
}

#[test]
fn test_init_file_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_files(&["debug.log"])?;

    test.command().arg("init").output()?;
    let output = test.check_command().arg("--deny").output()?;

    // The template only has comments, so nothing is suppressed.
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

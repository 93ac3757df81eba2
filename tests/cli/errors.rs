use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stderr};

#[test]
fn test_unsupported_extension_output() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "window.alert(1);")?;

    assert_cmd_snapshot!(test.command().args(["notes.txt", "out"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Unsupported file extension: .txt (supported: .js, .jsx, .ts, .tsx, .mjs, .cjs, .mts, .cts, .vue, .svelte)
    ");

    Ok(())
}

#[test]
fn test_unsupported_extension() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "window.alert(1);")?;

    let output = test.transpile(&["notes.txt", "out"])?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Unsupported file extension"));
    assert!(err.contains(".txt"));
    assert!(!test.exists("out"));
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.transpile(&["missing.js", "out"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Input file not found"));
    assert!(!test.exists("out"));
    Ok(())
}

#[test]
fn test_missing_argument_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.transpile(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage"));
    Ok(())
}

#[test]
fn test_syntax_error_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("Broken.tsx", "const x = window.;\n")?;

    let output = test.transpile(&["Broken.tsx", "out"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse"));
    assert!(!test.exists("out"));
    Ok(())
}

#[test]
fn test_invalid_global_name() -> Result<()> {
    let test = CliTest::with_file("a.js", "window.a();")?;

    let output = test.transpile(&["a.js", "out", "--global", "not-valid"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid global identifier"));
    Ok(())
}

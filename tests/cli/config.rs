use anyhow::Result;

use crate::{CliTest, stderr};

const SOURCE: &str = "navigator.clipboard.writeText('x');\nwindow.focus();\n";

#[test]
fn test_global_flag_replaces_defaults() -> Result<()> {
    let test = CliTest::with_file("a.js", SOURCE)?;

    let output = test.transpile(&["a.js", "out", "--global", "navigator"])?;
    assert!(output.status.success());

    let contents = test.read_file("out/file.js")?;
    assert!(contents.contains("navigator.clipboard.writeText('x');"));
    assert!(!contents.contains("window.focus();"));
    Ok(())
}

#[test]
fn test_config_file_sets_globals_and_output_dir() -> Result<()> {
    let test = CliTest::with_file("a.js", SOURCE)?;
    test.write_file(
        ".transpilerc.json",
        r#"{ "globals": ["navigator"], "outputDir": "generated" }"#,
    )?;

    let output = test.transpile(&["a.js"])?;
    assert!(output.status.success());

    let contents = test.read_file("generated/file.tsx")?;
    assert!(contents.contains("navigator.clipboard.writeText('x');"));
    assert!(!contents.contains("window.focus();"));
    assert!(!test.exists("transpiled-components"));
    Ok(())
}

#[test]
fn test_explicit_output_dir_wins_over_config() -> Result<()> {
    let test = CliTest::with_file("a.js", SOURCE)?;
    test.write_file(".transpilerc.json", r#"{ "outputDir": "generated" }"#)?;

    let output = test.transpile(&["a.js", "out"])?;

    assert!(output.status.success());
    assert!(test.exists("out/file.jsx"));
    assert!(!test.exists("generated"));
    Ok(())
}

#[test]
fn test_config_flag_loads_named_file() -> Result<()> {
    let test = CliTest::with_file("a.js", SOURCE)?;
    test.write_file("settings/custom.json", r#"{ "globals": ["window"] }"#)?;

    let output = test.transpile(&["a.js", "out", "--config", "settings/custom.json"])?;
    assert!(output.status.success());

    let contents = test.read_file("out/file.js")?;
    assert!(contents.contains("window.focus();"));
    assert!(!contents.contains("navigator"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file("a.js", SOURCE)?;
    test.write_file(".transpilerc.json", "{ not json")?;

    let output = test.transpile(&["a.js", "out"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".transpilerc.json"));
    assert!(!test.exists("out"));
    Ok(())
}

#[test]
fn test_config_flag_accepts_absolute_path() -> Result<()> {
    let test = CliTest::with_file("a.js", SOURCE)?;
    test.write_file("settings/abs.json", r#"{ "globals": ["navigator"] }"#)?;
    let config_path = test.root().join("settings").join("abs.json");

    let output = test
        .command()
        .args(["a.js", "out", "--config"])
        .arg(&config_path)
        .output()?;
    assert!(output.status.success());

    let contents = test.read_file("out/file.ts")?;
    assert!(contents.contains("navigator.clipboard.writeText('x');"));
    assert!(!contents.contains("window.focus();"));
    Ok(())
}

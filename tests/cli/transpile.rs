use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{ALL_ARTIFACTS, CliTest, stdout};

#[test]
fn test_vue_component_renders_every_variant() -> Result<()> {
    let test = CliTest::with_file(
        "App.vue",
        r#"<template>
  <div>{{ msg }}</div>
</template>

<script>
const msg = 'hi';
console.log(window.location.href);
</script>
"#,
    )?;

    let output = test.transpile(&["App.vue", "out"])?;
    assert!(output.status.success());

    for artifact in ALL_ARTIFACTS {
        assert!(test.exists(&format!("out/{artifact}")), "missing {artifact}");
    }

    assert_eq!(
        test.read_file("out/file.ts.vue")?,
        r#"<template>
  <div>My Component</div>
</template>

<script setup lang="ts">
import { onMounted } from 'vue';

onMounted((): void => {
  console.log(window.location.href);
});
</script>
"#
    );
    Ok(())
}

#[test]
fn test_script_without_globals_renders_empty_hooks() -> Result<()> {
    let test = CliTest::with_file("util.js", "export const add = (a, b) => a + b;\n")?;

    let output = test.transpile(&["util.js", "out"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No global statements found"));
    for artifact in ALL_ARTIFACTS {
        assert!(test.exists(&format!("out/{artifact}")), "missing {artifact}");
    }
    assert!(test.read_file("out/file.svelte")?.contains("onMount(() => {\n  });"));
    Ok(())
}

#[test]
fn test_statements_keep_source_order() -> Result<()> {
    let test = CliTest::with_file(
        "main.ts",
        r#"const theme: string = localStorage.getItem("theme") ?? "light";
function local(window: number) {
  return window + 1;
}
document.title = theme;
"#,
    )?;

    let output = test.transpile(&["main.ts", "out"])?;
    assert!(output.status.success());

    let vanilla = test.read_file("out/file.js")?;
    let first = vanilla.find("localStorage.getItem").unwrap();
    let second = vanilla.find("document.title = theme;").unwrap();
    assert!(first < second);
    assert!(!vanilla.contains("return window + 1;"));
    Ok(())
}

#[test]
fn test_svelte_component_first_script_block() -> Result<()> {
    let test = CliTest::with_file(
        "Widget.svelte",
        r#"<script>
  let width = window.innerWidth;
</script>

<p>{width}</p>
"#,
    )?;

    let output = test.transpile(&["Widget.svelte", "out"])?;
    assert!(output.status.success());

    let react = test.read_file("out/file.jsx")?;
    assert!(react.contains("let width = window.innerWidth;"));
    Ok(())
}

#[test]
fn test_default_output_directory() -> Result<()> {
    let test = CliTest::with_file("a.js", "window.scrollTo(0, 0);\n")?;

    let output = test.transpile(&["a.js"])?;

    assert!(output.status.success());
    assert!(test.exists("transpiled-components/file.es5.js"));
    assert!(
        test.read_file("transpiled-components/file.es5.js")?
            .contains("window.scrollTo(0, 0);")
    );
    Ok(())
}

#[test]
fn test_rerun_overwrites_artifacts() -> Result<()> {
    let test = CliTest::with_file("a.js", "window.a();\n")?;
    assert!(test.transpile(&["a.js", "out"])?.status.success());

    test.write_file("a.js", "document.b();\n")?;
    assert!(test.transpile(&["a.js", "out"])?.status.success());

    let contents = test.read_file("out/file.ts")?;
    assert!(contents.contains("document.b();"));
    assert!(!contents.contains("window.a();"));
    Ok(())
}

#[test]
fn test_quiet_prints_nothing() -> Result<()> {
    let test = CliTest::with_file("a.js", "window.a();\n")?;

    let output = test.transpile(&["a.js", "out", "--quiet"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    Ok(())
}

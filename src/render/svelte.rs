use super::{LanguageMode, hook_body};
use crate::core::GlobalCodeBlock;

/// Component script running the block in `onMount`.
pub(super) fn render(language: LanguageMode, block: &GlobalCodeBlock) -> String {
    let (script_tag, callback) = match language {
        LanguageMode::JavaScript => ("<script>", "() => {"),
        LanguageMode::TypeScript => ("<script lang=\"ts\">", "(): void => {"),
    };

    format!(
        "{script_tag}
  import {{ onMount }} from 'svelte';

  onMount({callback}
{body}  }});
</script>

<div>My Component</div>
",
        body = hook_body(block, 4),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svelte_typescript_script_tag() {
        let block = GlobalCodeBlock::from_statements(["localStorage.clear();"]);
        let output = render(LanguageMode::TypeScript, &block);

        assert!(output.starts_with("<script lang=\"ts\">\n"));
        assert!(output.contains("  onMount((): void => {\n    localStorage.clear();\n  });"));
    }

    #[test]
    fn test_svelte_javascript_empty_hook() {
        let output = render(LanguageMode::JavaScript, &GlobalCodeBlock::default());

        assert!(output.starts_with("<script>\n"));
        assert!(output.contains("  onMount(() => {\n  });"));
        assert!(output.ends_with("<div>My Component</div>\n"));
    }
}

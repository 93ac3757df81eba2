use super::{LanguageMode, hook_body};
use crate::core::GlobalCodeBlock;

/// Arrow-function IIFE.
pub(super) fn render(language: LanguageMode, block: &GlobalCodeBlock) -> String {
    let callback = match language {
        LanguageMode::JavaScript => "() => {",
        LanguageMode::TypeScript => "(): void => {",
    };

    format!("({callback}\n{body}}})();\n", body = hook_body(block, 2))
}

/// IIFE using only `function` syntax, for pre-ES2015 targets.
pub(super) fn render_es5(block: &GlobalCodeBlock) -> String {
    format!("(function () {{\n{body}}})();\n", body = hook_body(block, 2))
}

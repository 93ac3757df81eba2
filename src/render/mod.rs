//! Framework templates.
//!
//! Every [`OutputVariant`] maps to one template function. The extracted
//! [`GlobalCodeBlock`] is pasted into the framework's mount hook as opaque
//! text: each statement starts at the hook's depth and nothing else is
//! touched, so the output may reference names the target environment lacks.

mod angular;
mod react;
mod svelte;
mod vanilla;
mod vue;

use std::fmt;

use crate::core::GlobalCodeBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageMode {
    JavaScript,
    TypeScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Svelte,
    Angular,
    Vanilla,
    /// Plain output restricted to pre-ES2015 wrapper syntax.
    VanillaEs5,
}

impl Framework {
    pub fn name(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
            Framework::Angular => "angular",
            Framework::Vanilla => "vanilla",
            Framework::VanillaEs5 => "vanilla-es5",
        }
    }
}

/// One generated artifact: framework, language and path under the output
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputVariant {
    ReactJs,
    ReactTs,
    VueJs,
    VueTs,
    SvelteJs,
    SvelteTs,
    Angular,
    VanillaJs,
    VanillaEs5,
    VanillaTs,
}

impl OutputVariant {
    /// Every variant, in the order artifacts are written.
    pub const ALL: [OutputVariant; 10] = [
        OutputVariant::ReactJs,
        OutputVariant::ReactTs,
        OutputVariant::VueJs,
        OutputVariant::VueTs,
        OutputVariant::SvelteJs,
        OutputVariant::SvelteTs,
        OutputVariant::Angular,
        OutputVariant::VanillaJs,
        OutputVariant::VanillaEs5,
        OutputVariant::VanillaTs,
    ];

    pub fn framework(self) -> Framework {
        match self {
            OutputVariant::ReactJs | OutputVariant::ReactTs => Framework::React,
            OutputVariant::VueJs | OutputVariant::VueTs => Framework::Vue,
            OutputVariant::SvelteJs | OutputVariant::SvelteTs => Framework::Svelte,
            OutputVariant::Angular => Framework::Angular,
            OutputVariant::VanillaJs | OutputVariant::VanillaTs => Framework::Vanilla,
            OutputVariant::VanillaEs5 => Framework::VanillaEs5,
        }
    }

    pub fn language(self) -> LanguageMode {
        match self {
            OutputVariant::ReactJs
            | OutputVariant::VueJs
            | OutputVariant::SvelteJs
            | OutputVariant::VanillaJs
            | OutputVariant::VanillaEs5 => LanguageMode::JavaScript,
            OutputVariant::ReactTs
            | OutputVariant::VueTs
            | OutputVariant::SvelteTs
            | OutputVariant::Angular
            | OutputVariant::VanillaTs => LanguageMode::TypeScript,
        }
    }

    /// Path of the artifact relative to the output directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            OutputVariant::ReactJs => "file.jsx",
            OutputVariant::ReactTs => "file.tsx",
            OutputVariant::VueJs => "file.vue",
            OutputVariant::VueTs => "file.ts.vue",
            OutputVariant::SvelteJs => "file.svelte",
            OutputVariant::SvelteTs => "file.ts.svelte",
            OutputVariant::Angular => "angular_folder/my-component.component.ts",
            OutputVariant::VanillaJs => "file.js",
            OutputVariant::VanillaEs5 => "file.es5.js",
            OutputVariant::VanillaTs => "file.ts",
        }
    }
}

impl fmt::Display for OutputVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = match self.language() {
            LanguageMode::JavaScript => "js",
            LanguageMode::TypeScript => "ts",
        };
        write!(f, "{} ({})", self.framework().name(), language)
    }
}

/// Render `block` into the template of `variant`.
pub fn render(variant: OutputVariant, block: &GlobalCodeBlock) -> String {
    match variant {
        OutputVariant::ReactJs | OutputVariant::ReactTs => {
            react::render(variant.language(), block)
        }
        OutputVariant::VueJs | OutputVariant::VueTs => vue::render(variant.language(), block),
        OutputVariant::SvelteJs | OutputVariant::SvelteTs => {
            svelte::render(variant.language(), block)
        }
        OutputVariant::Angular => angular::render(block),
        OutputVariant::VanillaJs | OutputVariant::VanillaTs => {
            vanilla::render(variant.language(), block)
        }
        OutputVariant::VanillaEs5 => vanilla::render_es5(block),
    }
}

/// Hook body: each statement of `block` on its own line, its first line
/// prefixed with `depth` spaces. Continuation lines of a multi-line
/// statement are left as they were in the source, which keeps template
/// literals intact. Empty for an empty block.
fn hook_body(block: &GlobalCodeBlock, depth: usize) -> String {
    let pad = " ".repeat(depth);
    block
        .statements()
        .iter()
        .map(|statement| format!("{}{}\n", pad, statement))
        .collect()
}

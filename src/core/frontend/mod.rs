//! Format-specific front-ends.
//!
//! Each supported input format knows how to cut the program text out of a
//! file. Plain scripts are the program; single-file components carry it in
//! a `<script>` region. The extracted text is then parsed with the one
//! shared script parser, so nothing downstream branches on format.

mod sfc;
mod svelte;

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use enum_dispatch::enum_dispatch;
use tracing::debug;

use crate::core::parsers::{ParsedScript, parse_script_source};

pub use sfc::{SfcBlock, SfcDescriptor};

/// File extensions handled as plain scripts.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

pub const VUE_EXTENSION: &str = "vue";

pub const SVELTE_EXTENSION: &str = "svelte";

/// Pulls the program text out of a whole input file.
#[enum_dispatch]
pub trait ScriptExtractor {
    /// Returns `None` when the file has no script region at all.
    fn extract_script(&self, text: &str) -> Option<String>;
}

/// `.js`, `.jsx`, `.ts`, `.tsx` and friends: the whole file is the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainScript;

impl ScriptExtractor for PlainScript {
    fn extract_script(&self, text: &str) -> Option<String> {
        Some(text.to_string())
    }
}

/// Vue single-file component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VueComponent;

impl ScriptExtractor for VueComponent {
    fn extract_script(&self, text: &str) -> Option<String> {
        SfcDescriptor::parse(text).script_content()
    }
}

/// Svelte component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvelteComponent;

impl ScriptExtractor for SvelteComponent {
    fn extract_script(&self, text: &str) -> Option<String> {
        svelte::first_script_block(text)
    }
}

/// Input format, chosen from the file extension.
#[enum_dispatch(ScriptExtractor)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Script(PlainScript),
    Vue(VueComponent),
    Svelte(SvelteComponent),
}

impl SourceFormat {
    /// Resolve the format of `path` from its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            bail!(
                "Unsupported file: {} has no extension (supported: {})",
                path.display(),
                supported_extensions()
            );
        };

        let ext = ext.to_ascii_lowercase();
        if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(PlainScript.into())
        } else if ext == VUE_EXTENSION {
            Ok(VueComponent.into())
        } else if ext == SVELTE_EXTENSION {
            Ok(SvelteComponent.into())
        } else {
            bail!(
                "Unsupported file extension: .{} (supported: {})",
                ext,
                supported_extensions()
            )
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Script(_) => "script",
            SourceFormat::Vue(_) => "vue",
            SourceFormat::Svelte(_) => "svelte",
        }
    }
}

fn supported_extensions() -> String {
    SCRIPT_EXTENSIONS
        .iter()
        .chain([VUE_EXTENSION, SVELTE_EXTENSION].iter())
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read `path`, cut out its script region and parse it.
///
/// Returns `Ok(None)` when the file has no script region.
pub fn load_script(path: &Path, format: SourceFormat) -> Result<Option<ParsedScript>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let Some(script) = format.extract_script(&text) else {
        debug!(format = format.name(), "no script region found");
        return Ok(None);
    };

    debug!(
        format = format.name(),
        bytes = script.len(),
        "parsing script region"
    );
    parse_script_source(script, &path.to_string_lossy()).map(Some)
}

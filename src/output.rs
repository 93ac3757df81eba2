//! Rendering every variant and writing the artifacts.
//!
//! Rendering happens fully in memory before anything touches the disk, so a
//! failure earlier in the run never leaves a partial output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::GlobalCodeBlock;
use crate::render::{OutputVariant, render};

/// One rendered artifact, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub variant: OutputVariant,
    pub contents: String,
}

pub fn render_all(block: &GlobalCodeBlock) -> Vec<RenderedOutput> {
    OutputVariant::ALL
        .iter()
        .map(|&variant| RenderedOutput {
            variant,
            contents: render(variant, block),
        })
        .collect()
}

/// Write `outputs` under `output_dir`, creating directories as needed.
///
/// Returns the written paths in the order of `outputs`.
pub fn write_outputs(output_dir: &Path, outputs: &[RenderedOutput]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let path = output_dir.join(output.variant.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, &output.contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        info!(variant = %output.variant, path = %path.display(), "wrote artifact");
        written.push(path);
    }

    Ok(written)
}

//! One transpile run: config, front-end, extraction, rendering, writing.
//!
//! Every step that can fail on user input runs before the output directory
//! is created, so a rejected run leaves the filesystem untouched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::args::Arguments;
use crate::config::{Config, is_identifier, load_config, load_config_file};
use crate::core::{GlobalCodeBlock, GlobalIdentifierSet, SourceFormat, extract_globals, load_script};
use crate::output::{render_all, write_outputs};

/// What a successful run did.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub format: SourceFormat,
    pub config_path: Option<PathBuf>,
    pub block: GlobalCodeBlock,
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

pub fn run(args: Arguments) -> Result<RunSummary> {
    let (config, config_path) = resolve_config(args.config.as_deref())?;
    let globals = resolve_globals(&args.globals, &config)?;
    debug!(globals = ?globals.names(), "resolved global identifiers");

    if !args.input.exists() {
        bail!("Input file not found: {}", args.input.display());
    }
    if !args.input.is_file() {
        bail!("Input is not a file: {}", args.input.display());
    }
    let format = SourceFormat::from_path(&args.input)?;

    let block = match load_script(&args.input, format)? {
        Some(parsed) => extract_globals(&parsed, &globals),
        None => GlobalCodeBlock::default(),
    };

    let outputs = render_all(&block);
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));
    let written = write_outputs(&output_dir, &outputs)?;

    Ok(RunSummary {
        input: args.input,
        format,
        config_path,
        block,
        output_dir,
        written,
    })
}

fn resolve_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((load_config_file(path)?, Some(path.to_path_buf())));
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "loaded config file");
    }
    Ok((loaded.config, loaded.path))
}

/// `--global` names replace the configured set entirely.
fn resolve_globals(cli_globals: &[String], config: &Config) -> Result<GlobalIdentifierSet> {
    if cli_globals.is_empty() {
        return Ok(GlobalIdentifierSet::new(config.globals.iter().cloned()));
    }

    for name in cli_globals {
        if !is_identifier(name) {
            bail!("Invalid global identifier: \"{}\"", name);
        }
    }
    Ok(GlobalIdentifierSet::new(cli_globals.iter().cloned()))
}

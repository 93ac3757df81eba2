//! CLI argument definitions using clap.
//!
//! `transpile <INPUT> [OUTPUT_DIR]` reads one component or script and writes
//! the generated variants into `OUTPUT_DIR`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source file (.js, .jsx, .ts, .tsx, .mjs, .cjs, .mts, .cts, .vue, .svelte)
    pub input: PathBuf,

    /// Directory for the generated files (default: ./transpiled-components, or `outputDir` from the config file)
    pub output_dir: Option<PathBuf>,

    /// Global identifier to extract; repeat to pass several (replaces the configured set)
    #[arg(long = "global", value_name = "NAME")]
    pub globals: Vec<String>,

    /// Config file to use instead of searching for .transpilerc.json
    #[arg(long, env = "TRANSPILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print nothing on success
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

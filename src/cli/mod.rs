//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `run`: the transpile run itself
//! - `report`: colored summary printing
//! - `exit_status`: process exit codes

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::{SUCCESS_MARK, print_to};
pub use run::{RunSummary, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;
    let quiet = args.quiet;

    let summary = run(args)?;
    if !quiet {
        report::print(&summary, verbose);
    }

    Ok(ExitStatus::Success)
}

use std::process::ExitCode;

use clap::Parser;
use transpile::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    transpile::logger::init_logger(args.verbose, args.quiet);

    match transpile::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

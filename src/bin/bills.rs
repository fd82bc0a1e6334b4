use std::process::ExitCode;

use bill_core::cli::{self, Args};
use bill_core::SystemClock;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    bill_core::init();

    match cli::run(args, &SystemClock) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

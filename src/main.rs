use std::{io, process::ExitCode};

use clap::Parser;
use date_resolver::{
    cli::{Cli, EXIT_FAILURE},
    logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let stdout = io::stdout();
    match cli.run(&mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

// src/main.rs
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::debug;

use wfreq::{Args, WordCountError, logging};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            logging::init(0);
            return report(&WordCountError::Usage(e.to_string()).into());
        }
    };

    logging::init(args.verbose);
    match wfreq::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(error: &anyhow::Error) -> ExitCode {
    let Some(typed) = error.downcast_ref::<WordCountError>() else {
        eprintln!("Error: {error:?}");
        return ExitCode::FAILURE;
    };

    match typed {
        WordCountError::Usage(reason) => {
            debug!(%reason, "invalid arguments");
            println!("{typed}");
        }
        WordCountError::Path { path } => {
            debug!(path = %path.display(), "path could not be used");
            println!("{typed}");
        }
        WordCountError::Read { .. } | WordCountError::Config { .. } => {
            eprintln!("Error: {error:?}");
        }
    }
    ExitCode::from(typed.exit_code())
}

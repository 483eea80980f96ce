use clap::Parser;
use postgres_import_wizard::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been logged
            process::exit(0);
        }
        Err(error) => {
            // Already logged when logging was up; repeat on stderr for the exit status
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

//! Squaresum CLI
//!
//! Reads cases from stdin and prints one sum of squares per case.

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process;

#[derive(Parser)]
#[command(name = "squaresum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Sum the squares of the positive values in each case read from stdin",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("squaresum=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = squaresum::run(stdin.lock(), &mut out) {
        // Results of earlier cases still go out
        if let Err(flush_err) = out.flush() {
            eprintln!("Error: failed to flush output: {}", flush_err);
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

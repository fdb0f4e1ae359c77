use std::error::Error;
use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::{batch, search, verify, version};

#[derive(Parser, Debug)]
#[command(name = "lcd-sim", about = "Search for Hermitian LCD codes over GF(4)")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for one generator matrix.
    Search(search::SearchArgs),
    /// Search every record of a parameter list and export the results.
    Batch(batch::BatchArgs),
    /// Recompute a stored code's weight enumerator and LCD flag.
    Verify(verify::VerifyArgs),
    /// Print version information.
    Version(version::VersionArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Search(args) => search::run(&args),
        Command::Batch(args) => batch::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

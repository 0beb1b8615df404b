//! wordtally command-line entry point

use clap::Parser;
use wordtally_cli::commands::Commands;
use wordtally_cli::CliResult;

/// Count words and user-perceived characters in Unicode text
#[derive(Debug, Parser)]
#[command(name = "wordtally", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}

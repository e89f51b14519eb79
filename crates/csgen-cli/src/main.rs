use csgen_cli::gen;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize bindings for a generation request and write them as JSON
    Generate {
        /// Path to the JSON generation request
        request: PathBuf,

        /// Write the output model here instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,

        #[clap(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            request,
            output,
            pretty,
        } => gen::exec(&request, output.as_deref(), pretty),
    }
}

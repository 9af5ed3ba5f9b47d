use clap::Parser;

use crate::cli::*;

mod cli;
mod commands;

pub type CliResult<T> = stegano_lsb::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::Demo(args) => args.run(),
    }
}

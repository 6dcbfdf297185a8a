//! `tikhub` command line client

mod cli;
mod commands;

use clap::Parser;
use std::process::ExitCode;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.global.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List { platform } => print!("{}", commands::list(*platform)),
        Commands::Describe { endpoint } => print!("{}", commands::describe(endpoint)?),
        Commands::Call(args) => {
            let value = commands::call(&cli.global, args)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

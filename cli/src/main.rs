mod check;
mod cli;
mod error;
mod logging;
mod lookup;
mod progress;
mod serve;
mod ui;

use check::CheckArgs;
use clap::Parser;
use cli::{Cli, Commands};
use lookup::LookupArgs;
use serve::ServeArgs;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            config,
            input,
            output_dir,
            verbose,
        } => check::execute(CheckArgs {
            config_path: config,
            input,
            output_dir,
            verbose,
        }),
        Commands::Lookup {
            username,
            config,
            verbose,
        } => lookup::execute(LookupArgs {
            username,
            config_path: config,
            verbose,
        }),
        Commands::Serve {
            config,
            port,
            verbose,
        } => serve::execute(ServeArgs {
            config_path: config,
            port,
            verbose,
        }),
    };

    if let Err(err) = result {
        ui::error_message(&format!("Error: {}", err.user_message()));
        process::exit(1);
    }
}

mod cli;
mod error;
mod links;
mod logging;
mod render;
mod resolve;
mod session;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.command.input().verbose);

    let result = match cli.command {
        Commands::Render {
            input,
            format,
            output,
        } => render::execute(input, format, output),
        Commands::Links { input } => links::execute(input),
        Commands::Resolve { input } => resolve::execute(input),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

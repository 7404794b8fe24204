//! Dealership - vehicle lot inventory from intake forms
//!
//! A CLI tool that builds a dealership lot from raw intake forms and
//! answers inventory queries over it.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Chromactl - Developer command driver for the Chroma rendering engine
mod cli;
mod core;
mod domain;
mod infrastructure;

use clap::Parser;
use cli::args::Args;
use cli::commands::execute_command;

fn main() {
    let args = Args::parse();

    // Diagnostics are emitted by the output layer in the selected format
    if execute_command(args).is_err() {
        std::process::exit(1);
    }
}

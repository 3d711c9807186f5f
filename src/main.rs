//! # dirtree
//!
//! Prints a directory hierarchy as a line-art tree, depth-first, with entries
//! sorted by name and `node_modules` left out.
//!
//! ## Features
//! - Optional root path argument (defaults to the current directory)
//! - Unreadable directories are shown but not descended into
//! - Shell completions via `completions <shell>`

mod cli;
mod core;
mod run;

use clap::Parser;

use cli::{Args, Commands};

fn main() {
    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        run::print_completions(*shell);
        return;
    }

    if let Err(e) = run::run_tree(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

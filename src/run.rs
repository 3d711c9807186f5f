//! Application run modes: logger init, tree printing, shell completions.

use std::io::{self, BufWriter};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Args;
use crate::core;
use crate::core::tree::TreePrinter;

/// Initialize env_logger on stderr so stdout carries only the tree.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Print the tree of the configured root to stdout.
pub fn run_tree(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = core::config::load(args.path.clone())?;
    let excluded: Vec<_> = config.exclusions.names().collect();
    log::debug!(
        "{} v{}: listing {}, excluding {:?}",
        core::app::NAME,
        core::app::VERSION,
        config.root.display(),
        excluded
    );

    let printer = TreePrinter::new(config.exclusions);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match printer.print(&config.root, &mut out) {
        Ok(summary) => {
            log::info!(
                "{} directories, {} files, {} unreadable",
                summary.directories,
                summary.files,
                summary.skipped.len()
            );
            Ok(())
        }
        // Reader went away (e.g. piped into `head`); nothing left to do.
        Err(e) if e.is_broken_pipe() => {
            log::debug!("Output closed early: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    clap_complete::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
}

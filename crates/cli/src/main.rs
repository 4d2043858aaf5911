//! Lectern command-line front end.
//!
//! With no subcommand, prints the reference scenario: the next id of an empty
//! catalog, the next id of the seeded catalog, and the index of record 1.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let stdout = std::io::stdout();
	commands::run(cli.command(), cli.seed.as_deref(), &mut stdout.lock())
}

/// Logs go to stderr so stdout carries only query results.
fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("lectern=debug,lectern_catalog=debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};


#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(about = "Query an in-memory book catalog")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// TOML seed file to load instead of the built-in catalog
	#[arg(long, short = 's', value_name = "PATH", global = true)]
	pub seed: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute (defaults to `demo`).
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Print the next id of an empty catalog, the next id of the seeded catalog,
	/// and the index of id 1 in the seeded catalog
	Demo,
	/// List records as index, id, title, pages
	List,
	/// Print the next identifier the catalog would assign
	NextId,
	/// Print the position of a record identifier
	IndexOf {
		/// Record identifier to locate.
		id: u32,
	},
}

impl Cli {
	/// Returns the requested subcommand, falling back to [`Command::Demo`].
	pub fn command(&self) -> &Command {
		self.command.as_ref().unwrap_or(&Command::Demo)
	}
}

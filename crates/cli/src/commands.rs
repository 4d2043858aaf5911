use std::io::Write;
use std::path::Path;

use anyhow::Context;
use lectern_catalog::{Catalog, RecordId, seed};
use tracing::{debug, info};

use crate::cli::Command;

/// Runs `command` against the catalog described by `seed_path`, writing results to `out`.
pub fn run(
	command: &Command,
	seed_path: Option<&Path>,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let catalog = load_catalog(seed_path)?;

	match command {
		Command::Demo => {
			writeln!(out, "{}", Catalog::new().next_identifier())?;
			writeln!(out, "{}", catalog.next_identifier())?;
			writeln!(out, "{}", catalog.index_of(RecordId::FIRST)?)?;
		}
		Command::List => {
			for (index, record) in catalog.iter().enumerate() {
				let id = record
					.id()
					.map_or_else(|| "-".to_string(), |id| id.to_string());
				writeln!(
					out,
					"{index}\t{id}\t{}\t{}",
					record.title(),
					record.pages()
				)?;
			}
		}
		Command::NextId => writeln!(out, "{}", catalog.next_identifier())?,
		Command::IndexOf { id } => {
			let id = RecordId::new(*id)?;
			writeln!(out, "{}", catalog.index_of(id)?)?;
		}
	}

	Ok(())
}

fn load_catalog(seed_path: Option<&Path>) -> anyhow::Result<Catalog> {
	let catalog = match seed_path {
		Some(path) => seed::load(path)
			.with_context(|| format!("failed to load seed file {}", path.display()))?,
		None => {
			debug!("using built-in seed");
			seed::builtin().context("built-in seed is invalid")?
		}
	};
	info!(records = catalog.len(), "catalog ready");
	Ok(catalog)
}

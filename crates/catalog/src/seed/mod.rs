//! TOML seed files.
//!
//! A seed file lists the records a catalog starts with:
//!
//! ```toml
//! [[record]]
//! id = 1
//! title = "test_name_1"
//! pages = 200
//! ```
//!
//! `id` may be omitted, leaving the record unidentified.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{Catalog, CatalogError, Record, RecordError, RecordId};


/// Embedded seed used when the caller supplies none.
const BUILTIN_SEED: &str = include_str!("builtin.toml");

/// Errors that can occur when loading a seed.
#[derive(Debug, Error)]
pub enum SeedError {
	/// Error reading a seed file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A listed record failed validation.
	#[error("record #{index}: {source}")]
	Record {
		/// Zero-based position in the seed's record list.
		index: usize,
		source: RecordError,
	},

	/// A listed record reuses an identifier from an earlier record.
	#[error("record #{index}: duplicate record id: id={id}")]
	DuplicateId {
		/// Zero-based position of the second occurrence.
		index: usize,
		id: RecordId,
	},

	#[error(transparent)]
	Catalog(#[from] CatalogError),
}

/// Seed file structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
	#[serde(default, rename = "record")]
	records: Vec<SeedRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedRecord {
	id: Option<u32>,
	title: String,
	pages: u32,
}

impl SeedRecord {
	fn into_record(self) -> Result<Record, RecordError> {
		match self.id {
			Some(id) => Record::with_id(id, self.title, self.pages),
			None => Record::new(self.title, self.pages),
		}
	}
}

/// Builds a catalog from seed file contents.
pub fn parse(src: &str) -> Result<Catalog, SeedError> {
	let seed: SeedFile = toml::from_str(src)?;
	let mut seen = FxHashSet::default();
	let mut records = Vec::with_capacity(seed.records.len());
	for (index, raw) in seed.records.into_iter().enumerate() {
		let record = raw
			.into_record()
			.map_err(|source| SeedError::Record { index, source })?;
		if let Some(id) = record.id()
			&& !seen.insert(id)
		{
			return Err(SeedError::DuplicateId { index, id });
		}
		records.push(record);
	}
	Ok(Catalog::from_records(records)?)
}

/// Reads and parses the seed file at `path`.
pub fn load(path: &Path) -> Result<Catalog, SeedError> {
	let src = std::fs::read_to_string(path).map_err(|error| SeedError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let catalog = parse(&src)?;
	debug!(path = %path.display(), records = catalog.len(), "loaded seed file");
	Ok(catalog)
}

/// Builds the catalog from the embedded seed.
pub fn builtin() -> Result<Catalog, SeedError> {
	parse(BUILTIN_SEED)
}

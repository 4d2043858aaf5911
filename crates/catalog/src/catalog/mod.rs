//! Ordered record collection.
//!
//! A [`Catalog`] owns its records in insertion order and answers three
//! identifier queries over them:
//!
//! - [`Catalog::list_identifiers`]: identifiers in catalog order, or an explicit
//!   [`Identifiers::Empty`] tag when nothing is identified yet.
//! - [`Catalog::next_identifier`]: high-water-mark allocation (`max + 1`, or
//!   [`RecordId::FIRST`] for an empty catalog).
//! - [`Catalog::index_of`]: position of the record carrying an identifier.
//!
//! Present identifiers are pairwise distinct. Both construction paths
//! ([`Catalog::from_records`] and [`Catalog::insert`]) reject duplicates.
//!
//! `Catalog` does no locking of its own. Allocation followed by insertion is a
//! read-then-write sequence, so callers sharing a catalog across threads go
//! through [`SharedCatalog`](crate::SharedCatalog).

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{CatalogError, Record, RecordId};


/// Identifiers held by a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifiers {
	/// The catalog holds no identified records.
	Empty,
	/// Identifiers in catalog order. Never empty.
	Present(Vec<RecordId>),
}

impl Identifiers {
	fn from_vec(ids: Vec<RecordId>) -> Self {
		if ids.is_empty() {
			Self::Empty
		} else {
			Self::Present(ids)
		}
	}

	/// Returns the identifiers as a slice; empty for [`Identifiers::Empty`].
	pub fn as_slice(&self) -> &[RecordId] {
		match self {
			Self::Empty => &[],
			Self::Present(ids) => ids,
		}
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

/// Ordered collection of uniquely identified records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	records: Vec<Record>,
}

impl Catalog {
	/// Creates an empty catalog.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a catalog from caller-supplied records, keeping their order.
	///
	/// Fails with [`CatalogError::DuplicateId`] on the first identifier seen twice.
	pub fn from_records(records: Vec<Record>) -> Result<Self, CatalogError> {
		let mut seen = FxHashSet::default();
		for id in records.iter().filter_map(Record::id) {
			if !seen.insert(id) {
				return Err(CatalogError::DuplicateId { id });
			}
		}
		debug!(records = records.len(), "catalog built");
		Ok(Self { records })
	}

	/// Returns the identifiers of identified records in catalog order.
	///
	/// Records without an identifier are skipped.
	pub fn list_identifiers(&self) -> Identifiers {
		Identifiers::from_vec(self.records.iter().filter_map(Record::id).collect())
	}

	/// Returns an identifier that no record in the catalog carries.
	///
	/// This is [`RecordId::FIRST`] when nothing is identified and `max + 1`
	/// otherwise. Once `max` reaches [`RecordId::MAX`] there is no higher
	/// identifier to hand out, and the lowest unused one is returned instead.
	pub fn next_identifier(&self) -> RecordId {
		let ids = match self.list_identifiers() {
			Identifiers::Empty => return RecordId::FIRST,
			Identifiers::Present(ids) => ids,
		};
		let next = match ids.iter().copied().max().and_then(RecordId::successor) {
			Some(next) => next,
			None => lowest_free(ids),
		};
		debug!(%next, "allocated record id");
		next
	}

	/// Returns the position in [`Catalog::records`] of the record carrying `id`.
	///
	/// Unidentified records still occupy a position, so the result indexes
	/// straight into [`Catalog::records`].
	pub fn index_of(&self, id: RecordId) -> Result<usize, CatalogError> {
		trace!(%id, "looking up record index");
		self.records
			.iter()
			.position(|record| record.id() == Some(id))
			.ok_or(CatalogError::NotFound { id })
	}

	/// Appends `record`, assigning [`Catalog::next_identifier`] if it has none.
	///
	/// Returns the identifier the record is stored under.
	pub fn insert(&mut self, record: Record) -> Result<RecordId, CatalogError> {
		let id = match record.id() {
			Some(id) if self.get(id).is_some() => {
				return Err(CatalogError::DuplicateId { id });
			}
			Some(id) => id,
			None => self.next_identifier(),
		};
		debug!(%id, title = record.title(), "inserting record");
		self.records.push(record.identified(id));
		Ok(id)
	}

	/// Returns the record carrying `id`.
	pub fn get(&self, id: RecordId) -> Option<&Record> {
		self.records.iter().find(|record| record.id() == Some(id))
	}

	/// Returns all records in catalog order.
	#[inline]
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
		self.records.iter()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a Record;
	type IntoIter = std::slice::Iter<'a, Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

/// Lowest identifier missing from `ids`, which must be distinct.
///
/// A catalog able to hold every identifier up to [`RecordId::MAX`] would not
/// fit in memory, so a gap always exists in practice.
fn lowest_free(mut ids: Vec<RecordId>) -> RecordId {
	ids.sort_unstable();
	let mut candidate = RecordId::FIRST;
	for id in ids {
		if id != candidate {
			break;
		}
		match candidate.successor() {
			Some(next) => candidate = next,
			None => break,
		}
	}
	candidate
}

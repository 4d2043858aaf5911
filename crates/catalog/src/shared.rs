use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Catalog, CatalogError, Identifiers, Record, RecordId};

/// Cloneable handle to a catalog shared between threads.
///
/// Every operation takes the lock once, so [`SharedCatalog::insert`] allocates
/// and stores an identifier atomically and concurrent inserts never collide.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
	inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
	pub fn new(catalog: Catalog) -> Self {
		Self {
			inner: Arc::new(Mutex::new(catalog)),
		}
	}

	/// Inserts `record` under the lock. See [`Catalog::insert`].
	pub fn insert(&self, record: Record) -> Result<RecordId, CatalogError> {
		self.inner.lock().insert(record)
	}

	/// Returns the identifier the next unidentified insert would receive.
	///
	/// Another handle may insert before the caller acts on the value; use
	/// [`SharedCatalog::insert`] to allocate.
	pub fn next_identifier(&self) -> RecordId {
		self.inner.lock().next_identifier()
	}

	pub fn index_of(&self, id: RecordId) -> Result<usize, CatalogError> {
		self.inner.lock().index_of(id)
	}

	pub fn list_identifiers(&self) -> Identifiers {
		self.inner.lock().list_identifiers()
	}

	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}

	/// Returns a copy of the current catalog state.
	pub fn snapshot(&self) -> Catalog {
		self.inner.lock().clone()
	}
}

impl From<Catalog> for SharedCatalog {
	fn from(catalog: Catalog) -> Self {
		Self::new(catalog)
	}
}

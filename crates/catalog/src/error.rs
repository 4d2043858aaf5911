use thiserror::Error;

use crate::RecordId;

/// Record construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
	/// Identifier outside `1..u32::MAX`.
	#[error("invalid record id: {0} (expected 1..4294967295)")]
	InvalidId(u32),

	#[error("record title must not be blank")]
	EmptyTitle,

	#[error("record page count must be positive")]
	ZeroPages,
}

/// Catalog query and mutation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	/// No record in the catalog carries this identifier.
	#[error("record not found: id={id}")]
	NotFound { id: RecordId },

	/// Two records would share the same identifier.
	#[error("duplicate record id: id={id}")]
	DuplicateId { id: RecordId },
}

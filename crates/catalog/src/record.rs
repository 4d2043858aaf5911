use std::num::NonZeroU32;

use crate::{RecordError, RecordId};

/// A book held by a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	id: Option<RecordId>,
	title: String,
	pages: NonZeroU32,
}

impl Record {
	/// Creates an unidentified record.
	///
	/// The title must contain a non-whitespace character and the page count
	/// must be positive.
	pub fn new(title: impl Into<String>, pages: u32) -> Result<Self, RecordError> {
		let title = title.into();
		if title.trim().is_empty() {
			return Err(RecordError::EmptyTitle);
		}
		let pages = NonZeroU32::new(pages).ok_or(RecordError::ZeroPages)?;
		Ok(Self {
			id: None,
			title,
			pages,
		})
	}

	/// Creates a record with a caller-supplied identifier.
	pub fn with_id(id: u32, title: impl Into<String>, pages: u32) -> Result<Self, RecordError> {
		let id = RecordId::new(id)?;
		Ok(Self::new(title, pages)?.identified(id))
	}

	/// Returns this record carrying `id`.
	#[must_use]
	pub fn identified(mut self, id: RecordId) -> Self {
		self.id = Some(id);
		self
	}

	#[inline]
	pub fn id(&self) -> Option<RecordId> {
		self.id
	}

	#[inline]
	pub fn title(&self) -> &str {
		&self.title
	}

	#[inline]
	pub fn pages(&self) -> u32 {
		self.pages.get()
	}
}

impl std::fmt::Display for Record {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Book \"{}\"", self.title)
	}
}

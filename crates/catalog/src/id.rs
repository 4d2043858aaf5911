use crate::RecordError;

/// Numeric identifier for a record in a catalog.
///
/// Valid identifiers lie in `1..u32::MAX`; zero and `u32::MAX` are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u32);

impl RecordId {
	/// First identifier handed out by an empty catalog.
	pub const FIRST: RecordId = RecordId(1);

	/// Largest valid identifier.
	pub const MAX: RecordId = RecordId(u32::MAX - 1);

	/// Validates and wraps a raw identifier.
	pub fn new(raw: u32) -> Result<Self, RecordError> {
		if raw == 0 || raw == u32::MAX {
			return Err(RecordError::InvalidId(raw));
		}
		Ok(Self(raw))
	}

	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}

	/// Returns the identifier directly above this one, or `None` at [`RecordId::MAX`].
	#[inline]
	pub fn successor(self) -> Option<RecordId> {
		(self < Self::MAX).then(|| RecordId(self.0 + 1))
	}
}

impl TryFrom<u32> for RecordId {
	type Error = RecordError;

	fn try_from(raw: u32) -> Result<Self, Self::Error> {
		Self::new(raw)
	}
}

impl From<RecordId> for u32 {
	fn from(id: RecordId) -> Self {
		id.0
	}
}

impl std::fmt::Display for RecordId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

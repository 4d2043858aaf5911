//! In-memory book catalog.
//!
//! This crate provides:
//! - [`RecordId`]: Positive identifier for a record within a catalog
//! - [`Record`]: A titled book with a page count and an optional identifier
//! - [`Catalog`]: Ordered record collection answering identifier queries
//! - [`SharedCatalog`]: Lock-guarded handle for allocating from several threads
//! - [`seed`]: TOML seed files and the built-in seed

/// Ordered record collection and identifier queries.
pub mod catalog;
/// Error types for records and catalogs.
pub mod error;
/// Record identifiers.
pub mod id;
/// Record values.
pub mod record;
/// Seed file parsing.
pub mod seed;
/// Thread-safe catalog handle.
pub mod shared;

pub use catalog::{Catalog, Identifiers};
pub use error::{CatalogError, RecordError};
pub use id::RecordId;
pub use record::Record;
pub use seed::SeedError;
pub use shared::SharedCatalog;

//! # fr-store — Prize catalog store for FortuneReel
//!
//! Catalog CRUD with validation, default seeding, and persistence through
//! an opaque key-value interface:
//!
//! - **KvStore**: string key-value trait with in-memory and JSON-file backends
//! - **CatalogStore**: owns the catalog, validates mutations, writes through
//!
//! Load failures never surface to the user: a missing or unreadable stored
//! catalog falls back to the default prize set.

pub mod catalog;
pub mod kv;

pub use catalog::*;
pub use kv::*;

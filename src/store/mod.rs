//! Document storage driver for docstore
//!
//! The driver holds the canonical persistent state: one JSON file per
//! record, one directory per collection, all under a single root.
//!
//! # Design Principles
//!
//! - Full-record writes, persisted atomically (temp file + rename)
//! - One mutex per collection; writers and deleters are serialized,
//!   readers take no lock at all
//! - Records are opaque JSON blobs; deserialization is the caller's side
//!   of the boundary
//! - Errors are immediate and terminal, no retries anywhere
//!
//! # Invariants Enforced
//!
//! - A record observed after a successful write is a complete old or a
//!   complete new body, never a mix
//! - The lock-table guard is held only for lookup-or-create, never across
//!   filesystem calls
//! - Name validation happens before any locking or I/O

mod driver;
mod errors;
mod locks;
mod paths;

pub use driver::{Driver, Options};
pub use errors::{StoreError, StoreResult};

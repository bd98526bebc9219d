//! docstore - a minimal, file-backed JSON document store
//!
//! Records are individual JSON files on disk, grouped into per-directory
//! collections under a single root. The [`store::Driver`] is the whole API:
//! write, read, read_all, delete.

pub mod cli;
pub mod observability;
pub mod store;

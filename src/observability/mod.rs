//! Logging facility for docstore
//!
//! The driver only needs a sink with leveled methods; everything here is
//! the default console implementation plus an in-memory sink for tests.

mod logger;

pub use logger::{ConsoleLogger, Logger, MemoryLogger, Severity};

//! CLI argument definitions using clap
//!
//! Commands:
//! - docstore put <collection> <resource> [--data <json>] --dir <path>
//! - docstore get <collection> <resource> --dir <path>
//! - docstore list <collection> --dir <path>
//! - docstore delete <collection> <resource> --dir <path>
//! - docstore drop <collection> --dir <path>
//! - docstore seed --dir <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docstore - a minimal, file-backed JSON document store
#[derive(Parser, Debug)]
#[command(name = "docstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log store internals at trace level
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one record into a collection
    Put {
        /// Collection the record belongs to
        collection: String,

        /// Resource name of the record
        resource: String,

        /// JSON payload; read from stdin when omitted
        #[arg(long)]
        data: Option<String>,

        /// Root directory of the store
        #[arg(long, default_value = "./data")]
        dir: PathBuf,
    },

    /// Print one record's raw JSON
    Get {
        /// Collection the record belongs to
        collection: String,

        /// Resource name of the record
        resource: String,

        /// Root directory of the store
        #[arg(long, default_value = "./data")]
        dir: PathBuf,
    },

    /// Print every record in a collection
    List {
        /// Collection to list
        collection: String,

        /// Root directory of the store
        #[arg(long, default_value = "./data")]
        dir: PathBuf,
    },

    /// Remove one record
    Delete {
        /// Collection the record belongs to
        collection: String,

        /// Resource name of the record
        resource: String,

        /// Root directory of the store
        #[arg(long, default_value = "./data")]
        dir: PathBuf,
    },

    /// Remove a whole collection and every record in it
    Drop {
        /// Collection to remove
        collection: String,

        /// Root directory of the store
        #[arg(long, default_value = "./data")]
        dir: PathBuf,
    },

    /// Write the sample employee records and read them back
    Seed {
        /// Root directory of the store
        #[arg(long, default_value = "./data")]
        dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

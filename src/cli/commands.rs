//! CLI command implementations
//!
//! Every command opens the store fresh, performs one operation, and
//! exits; the CLI holds no state of its own.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::observability::{ConsoleLogger, Logger, Severity};
use crate::store::{Driver, Options};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{read_payload, write_blob, write_line};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch an already-parsed invocation.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let verbose = cli.verbose;
    match cli.command {
        Command::Put {
            collection,
            resource,
            data,
            dir,
        } => put(&dir, verbose, &collection, &resource, data),
        Command::Get {
            collection,
            resource,
            dir,
        } => get(&dir, verbose, &collection, &resource),
        Command::List { collection, dir } => list(&dir, verbose, &collection),
        Command::Delete {
            collection,
            resource,
            dir,
        } => delete(&dir, verbose, &collection, &resource),
        Command::Drop { collection, dir } => drop_collection(&dir, verbose, &collection),
        Command::Seed { dir } => seed(&dir, verbose),
    }
}

fn open_store(dir: &Path, verbose: bool) -> CliResult<Driver> {
    let threshold = if verbose {
        Severity::Trace
    } else {
        Severity::Info
    };
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new(threshold));
    Ok(Driver::open(dir, Options { logger: Some(logger) })?)
}

fn put(
    dir: &Path,
    verbose: bool,
    collection: &str,
    resource: &str,
    data: Option<String>,
) -> CliResult<()> {
    let payload = match data {
        Some(data) => data,
        None => read_payload()?,
    };
    // Parse before storing so a malformed payload never reaches disk.
    let value: Value = serde_json::from_str(&payload)?;

    let store = open_store(dir, verbose)?;
    store.write(collection, resource, &value)?;
    write_line(&format!("stored {}/{}", collection, resource))
}

fn get(dir: &Path, verbose: bool, collection: &str, resource: &str) -> CliResult<()> {
    let store = open_store(dir, verbose)?;
    let value: Value = store.read(collection, resource)?;
    write_blob(&serde_json::to_string_pretty(&value)?)
}

fn list(dir: &Path, verbose: bool, collection: &str) -> CliResult<()> {
    let store = open_store(dir, verbose)?;
    for blob in store.read_all(collection)? {
        write_blob(&blob)?;
    }
    Ok(())
}

fn delete(dir: &Path, verbose: bool, collection: &str, resource: &str) -> CliResult<()> {
    let store = open_store(dir, verbose)?;
    store.delete(collection, resource)?;
    write_line(&format!("deleted {}/{}", collection, resource))
}

fn drop_collection(dir: &Path, verbose: bool, collection: &str) -> CliResult<()> {
    let store = open_store(dir, verbose)?;
    store.delete_collection(collection)?;
    write_line(&format!("dropped {}", collection))
}

/// Sample record schema for the seed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

/// Sample record schema for the seed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub company: String,
    pub address: Address,
}

fn sample_users() -> Vec<User> {
    let address = |city: &str, pincode: &str| Address {
        city: city.to_string(),
        state: "Jharkhand".to_string(),
        country: "India".to_string(),
        pincode: pincode.to_string(),
    };
    let user = |name: &str, age: u32, company: &str, address: Address| User {
        name: name.to_string(),
        age,
        contact: "2378367837".to_string(),
        company: company.to_string(),
        address,
    };

    vec![
        user("John", 23, "Google", address("Dhanbad", "828122")),
        user("Doe", 25, "Facebook", address("Ranchi", "828133")),
        user("Jane", 27, "Amazon", address("Jamshedpur", "821645")),
        user("Dane", 29, "Microsoft", address("Jamtara", "287334")),
        user("Pete", 31, "Apple", address("Bokaro", "179232")),
        user("Steve", 33, "Tesla", address("Bhuli", "987632")),
    ]
}

/// Writes the sample employees into `users`, reads the collection back,
/// and prints one summary line per deserialized record.
fn seed(dir: &Path, verbose: bool) -> CliResult<()> {
    let store = open_store(dir, verbose)?;

    let users = sample_users();
    for user in &users {
        store.write("users", &user.name, user)?;
    }

    let blobs = store.read_all("users")?;
    for blob in &blobs {
        let user: User = serde_json::from_str(blob)?;
        write_line(&format!(
            "{} ({}) - {}, {}",
            user.name, user.age, user.company, user.address.city
        ))?;
    }

    write_line(&format!("seeded {} records into users", blobs.len()))
}

//! Contact Book - Main entry point
//!
//! Loads the seed files named by the configuration and starts the
//! interactive menu on stdin/stdout.

use anyhow::Result;
use contact_book::{Config, Console, ContactStore};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr, the menu owns stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut store = ContactStore::new();
    if config.load_seed {
        load_seed(&mut store, &config);
    }

    let stdin = io::stdin();
    let mut console = Console::new(store, stdin.lock(), io::stdout());
    console.run()?;

    info!(contacts = console.store().len(), "Session ended");
    Ok(())
}

/// Import the seed CSV, then the seed vCard. Failures are logged and skipped.
fn load_seed(store: &mut ContactStore, config: &Config) {
    let csv_path = config.seed_csv_path();
    match store.import_csv(&csv_path) {
        Ok(count) => info!(path = %csv_path.display(), count, "Loaded seed CSV"),
        Err(e) => warn!(error = %e, "Skipping seed CSV"),
    }

    let vcard_path = config.seed_vcard_path();
    match store.import_vcard(&vcard_path) {
        Ok(count) => info!(path = %vcard_path.display(), count, "Loaded seed vCard"),
        Err(e) => warn!(error = %e, "Skipping seed vCard"),
    }
}

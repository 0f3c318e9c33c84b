//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, after reading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the seed files (default: "data")
    pub data_dir: PathBuf,

    /// Seed CSV file name inside `data_dir` (default: "contacts.csv")
    pub seed_csv: String,

    /// Seed vCard file name inside `data_dir` (default: "contacts.vcf")
    pub seed_vcard: String,

    /// Whether to import the seed files at startup (default: true)
    pub load_seed: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_DIR`: Directory holding the seed files (default: data)
    /// - `CONTACTS_SEED_CSV`: Seed CSV file name (default: contacts.csv)
    /// - `CONTACTS_SEED_VCARD`: Seed vCard file name (default: contacts.vcf)
    /// - `CONTACTS_LOAD_SEED`: Import the seed files at startup (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let data_dir = env::var("CONTACTS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let seed_csv = Self::parse_env_file_name("CONTACTS_SEED_CSV", defaults.seed_csv)?;
        let seed_vcard = Self::parse_env_file_name("CONTACTS_SEED_VCARD", defaults.seed_vcard)?;
        let load_seed = Self::parse_env_bool("CONTACTS_LOAD_SEED", defaults.load_seed)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_dir,
            seed_csv,
            seed_vcard,
            load_seed,
            log_level,
        })
    }

    /// Full path of the seed CSV file.
    pub fn seed_csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.seed_csv)
    }

    /// Full path of the seed vCard file.
    pub fn seed_vcard_path(&self) -> PathBuf {
        self.data_dir.join(&self.seed_vcard)
    }

    /// Parse an environment variable as a non-empty file name.
    fn parse_env_file_name(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            seed_csv: "contacts.csv".to_string(),
            seed_vcard: "contacts.vcf".to_string(),
            load_seed: true,
            log_level: "warn".to_string(),
        }
    }
}

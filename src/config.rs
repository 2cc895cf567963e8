//! Configuration management for Libram

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Backing file for the book catalog (one `title,author,isbn` per line)
    pub books_file: PathBuf,
    /// Backing file for the borrow registry (one `isbn,borrower` per line)
    pub borrowed_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRAM_)
            .add_source(
                Environment::with_prefix("LIBRAM")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override file paths from plain env vars if present
            .set_override_option("storage.books_file", env::var("BOOKS_FILE").ok())?
            .set_override_option("storage.borrowed_file", env::var("BORROWED_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            books_file: PathBuf::from("books.txt"),
            borrowed_file: PathBuf::from("borrowed.txt"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

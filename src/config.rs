//! Configuration for the anime catalog
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a catalog server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON document holding the whole collection (id -> entry)
    pub data_file: PathBuf,

    /// How mutating requests coordinate their read-modify-write cycle
    pub write_strategy: WriteStrategy,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

/// Write coordination strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteStrategy {
    /// No lock around read-modify-write. Concurrent writers can clobber
    /// each other's changes (lost update).
    #[default]
    Unguarded,

    /// Mutating requests hold a single writer lock for their whole
    /// load -> mutate -> save cycle
    Serialized,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/anime.json"),
            write_strategy: WriteStrategy::Unguarded,
            listen_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the collection file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the write coordination strategy
    pub fn write_strategy(mut self, strategy: WriteStrategy) -> Self {
        self.config.write_strategy = strategy;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

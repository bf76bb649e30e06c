// Path: crates/node/src/home.rs
//! The on-disk layout of a node home directory.

use anyhow::{anyhow, Context, Result};
use pickle_state::RedbStore;
use pickle_types::app::GenesisState;
use pickle_types::config::NodeConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the node configuration file.
pub const CONFIG_FILE: &str = "config.toml";
/// Name of the genesis document written by `init`.
pub const GENESIS_FILE: &str = "genesis.json";

/// An opened home directory and its configuration.
#[derive(Debug, Clone)]
pub struct NodeHome {
    root: PathBuf,
    config: NodeConfig,
}

impl NodeHome {
    /// Creates `root` with a default `config.toml`, a default `genesis.json`,
    /// and an empty database. Refuses to overwrite an existing config.
    pub fn init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create home directory {}", root.display()))?;

        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(anyhow!(
                "{} already exists; refusing to overwrite",
                config_path.display()
            ));
        }
        let config = NodeConfig::default();
        fs::write(&config_path, config.to_toml_string()?)
            .with_context(|| format!("failed to write {}", config_path.display()))?;

        let genesis_path = root.join(GENESIS_FILE);
        let genesis = serde_json::to_string_pretty(&GenesisState::default())?;
        fs::write(&genesis_path, genesis)
            .with_context(|| format!("failed to write {}", genesis_path.display()))?;

        let home = Self {
            root: root.to_path_buf(),
            config,
        };
        home.open_store()?;
        Ok(home)
    }

    /// Opens an initialized home directory.
    pub fn open(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        let raw = fs::read_to_string(&config_path).with_context(|| {
            format!(
                "failed to read {}; run `pickled init` first",
                config_path.display()
            )
        })?;
        let config = NodeConfig::from_toml_str(&raw)
            .with_context(|| format!("invalid configuration in {}", config_path.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Path of the default genesis document.
    pub fn genesis_path(&self) -> PathBuf {
        self.root.join(GENESIS_FILE)
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.root.join(&self.config.db_file)
    }

    /// Opens (creating if needed) the database.
    pub fn open_store(&self) -> Result<RedbStore> {
        let path = self.db_path();
        RedbStore::open(&path).with_context(|| format!("failed to open database {}", path.display()))
    }
}

/// Reads and parses a genesis document.
pub fn read_genesis(path: &Path) -> Result<GenesisState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read genesis file {}", path.display()))?;
    GenesisState::from_json_str(&raw)
        .with_context(|| format!("failed to parse genesis file {}", path.display()))
}

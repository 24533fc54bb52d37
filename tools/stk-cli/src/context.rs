//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use stk_cache::FileStore;
use stk_commerce::Shop;

use crate::config::{StkConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StkConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Store directory given on the command line.
    store_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, store: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            StkConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let store_override = store.map(|dir| resolve(&cwd, dir));
        Ok(Self {
            config,
            output,
            cwd,
            store_override,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<StkConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StkConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(path = %config_path.display(), "{:#}", e),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Get the directory the cart is stored in.
    pub fn store_dir(&self) -> PathBuf {
        match &self.store_override {
            Some(dir) => dir.clone(),
            None => resolve(&self.cwd, &self.config.storage.dir),
        }
    }

    /// Open a storefront session over the file store.
    pub fn open_shop(&self) -> Result<Shop<FileStore>> {
        let dir = self.store_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open store: {}", dir.display()))?;
        self.output.debug(&format!("Using store {}", dir.display()));

        Ok(Shop::open(store, self.config.shop.clone()))
    }
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stk_commerce::ShopConfig;

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["stk.toml", ".stk.toml", "stk.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StkConfig {
    /// Storefront settings.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Where the cart is kept.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl StkConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the stored cart, relative to the working directory.
    #[serde(default = "default_dir")]
    pub dir: String,
}

fn default_dir() -> String {
    ".stk".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

/// Generate a default stk.toml config file.
pub fn generate_default_config() -> String {
    r#"# STK storefront configuration

[shop]
storage_key = "cart"
page_size = 12
# all, weapons, money, watches or scripts
default_category = "weapons"
price_ceiling = 1000.0

[shop.shipping]
policy = "flat"
fee = 9.99
free_over = 50.0
# policy = "free"

[storage]
dir = ".stk"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stk_commerce::catalog::CategoryFilter;
    use stk_commerce::checkout::ShippingPolicy;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: StkConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, StkConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: StkConfig = toml::from_str(
            r#"
            [shop]
            default_category = "all"

            [shop.shipping]
            policy = "free"
            "#,
        )
        .unwrap();

        assert_eq!(config.shop.default_category, CategoryFilter::All);
        assert_eq!(config.shop.shipping, ShippingPolicy::Free);
        assert_eq!(config.shop.page_size, 12);
        assert_eq!(config.storage.dir, ".stk");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StkConfig::default();
        config.shop.page_size = 6;

        for name in ["stk.toml", "stk.json"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();
            config.save(path).unwrap();
            assert_eq!(StkConfig::load(path).unwrap(), config);
        }
    }
}

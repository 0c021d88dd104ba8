use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// GIF provider settings
    #[serde(default)]
    pub giphy: GiphyConfig,
    /// Recipe search provider settings
    #[serde(default)]
    pub recipes: RecipeProviderConfig,
}

/// Configuration for the Giphy client
#[derive(Debug, Deserialize, Clone)]
pub struct GiphyConfig {
    /// API key sent with every request; passed through as-is, even when empty
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the API (override for proxies or tests)
    #[serde(default = "default_giphy_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_giphy_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the recipe search client
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeProviderConfig {
    #[serde(default = "default_recipes_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Filter ingredient tokens that are empty after trimming
    #[serde(default)]
    pub drop_empty_ingredients: bool,
}

impl Default for RecipeProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_recipes_base_url(),
            timeout: default_timeout(),
            drop_empty_ingredients: false,
        }
    }
}

impl GiphyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl RecipeProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

// Default value functions
fn default_giphy_base_url() -> String {
    "https://api.giphy.com".to_string()
}

fn default_recipes_base_url() -> String {
    "http://www.recipepuppy.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_LOOKUP__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_LOOKUP__GIPHY__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// When no Giphy key is configured, the conventional `GIPHY_API_KEY`
/// variable is used instead. This is the only place the process
/// environment is consulted for it.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_LOOKUP__GIPHY__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE_LOOKUP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    if config.giphy.api_key.is_empty() {
        if let Ok(key) = std::env::var("GIPHY_API_KEY") {
            config.giphy.api_key = key;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_giphy_base_url(), "https://api.giphy.com");
        assert_eq!(default_recipes_base_url(), "http://www.recipepuppy.com");
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert!(config.giphy.api_key.is_empty());
        assert_eq!(config.giphy.timeout(), Duration::from_secs(30));
        assert_eq!(config.recipes.timeout(), Duration::from_secs(30));
        assert!(!config.recipes.drop_empty_ingredients);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [giphy]
                api_key = "test-key"

                [recipes]
                timeout = 5
                drop_empty_ingredients = true
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.giphy.api_key, "test-key");
        assert_eq!(config.giphy.base_url, "https://api.giphy.com");
        assert_eq!(config.recipes.timeout, 5);
        assert!(config.recipes.drop_empty_ingredients);
    }

    #[test]
    fn test_load_config_without_file() {
        // No config.toml in the crate root, so loading must not fail
        let result = load_config();
        assert!(result.is_ok());
    }
}

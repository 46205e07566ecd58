//! Configuration Module
//!
//! Handles loading shell configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default catalog base URL.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog base URL, without a trailing slash
    pub api_url: String,
    /// Cache TTL in seconds; also the reap period
    pub cache_ttl: u64,
    /// Prompt printed before each line of input
    pub prompt: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - Catalog base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_PROMPT` - REPL prompt (default: "Pokedex > ")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.cache_ttl),
            prompt: env::var("POKEDEX_PROMPT").unwrap_or(defaults.prompt),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl: 300,
            prompt: "Pokedex > ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.prompt, "Pokedex > ");
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env so runs can't race each other
        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_CACHE_TTL");
        env::remove_var("POKEDEX_PROMPT");

        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cache_ttl, 300);

        env::set_var("POKEDEX_API_URL", "http://127.0.0.1:9000/api/v2/");
        env::set_var("POKEDEX_CACHE_TTL", "0");
        let config = Config::from_env();
        assert_eq!(config.api_url, "http://127.0.0.1:9000/api/v2");
        assert_eq!(config.cache_ttl, 300, "zero TTL falls back to default");

        env::set_var("POKEDEX_CACHE_TTL", "15");
        assert_eq!(Config::from_env().cache_ttl, 15);

        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_CACHE_TTL");
    }
}

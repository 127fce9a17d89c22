#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::FileConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub verbose: bool,
    pub json_logs: bool,
}

impl ResolvedConfig {
    /// Flags win over the file, the file wins over built-in defaults.
    pub fn merge(
        file: Option<&FileConfig>,
        base_url: Option<&str>,
        verbose: bool,
        json_logs: bool,
    ) -> Self {
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| file.and_then(|f| f.api.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            verbose: verbose || file.is_some_and(|f| f.verbose),
            json_logs: json_logs || file.is_some_and(|f| f.json_logs()),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::merge(None, None, false, false)
    }
}

impl ConfigProvider for ResolvedConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("api.base_url", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::default();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(!config.verbose());
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig::from_toml_str(
            "verbose = true\n[api]\nbase_url = \"http://localhost:9000\"\n[logging]\nformat = \"json\"",
        )
        .unwrap();

        let config = ResolvedConfig::merge(Some(&file), None, false, false);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert!(config.verbose);
        assert!(config.json_logs);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::from_toml_str("[api]\nbase_url = \"http://localhost:9000\"").unwrap();

        let config = ResolvedConfig::merge(Some(&file), Some("http://127.0.0.1:1"), true, false);

        assert_eq!(config.base_url, "http://127.0.0.1:1");
        assert!(config.verbose);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let config = ResolvedConfig::merge(None, Some("dnd.example.com"), false, false);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_with_query_fails_validation() {
        let config = ResolvedConfig::merge(None, Some("http://localhost:8080?k=v"), false, false);
        assert!(config.validate().is_err());

        let file = FileConfig::from_toml_str("[api]\nbase_url = \"http://localhost:8080/#x\"").unwrap();
        assert!(file.validate().is_err());
    }
}

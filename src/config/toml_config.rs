use crate::utils::error::{DndError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub format: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DND_API_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| DndError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            validation::validate_base_url("api.base_url", base_url)?;
        }
        if let Some(format) = &self.logging.format {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
verbose = true

[api]
base_url = "http://localhost:8080"

[logging]
format = "json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert!(config.verbose);
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();

        assert!(!config.verbose);
        assert_eq!(config.api.base_url, None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DND_CLASSES_TEST_BASE", "https://dnd.example.com");

        let toml_content = r#"
[api]
base_url = "${DND_CLASSES_TEST_BASE}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://dnd.example.com")
        );

        std::env::remove_var("DND_CLASSES_TEST_BASE");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[api]
base_url = "${DND_CLASSES_SURELY_UNSET}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("${DND_CLASSES_SURELY_UNSET}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_url = FileConfig::from_toml_str("[api]\nbase_url = \"ftp://x\"").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_format = FileConfig::from_toml_str("[logging]\nformat = \"xml\"").unwrap();
        assert!(bad_format.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FileConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(!err.is_request_failure());
        assert!(matches!(err, DndError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"https://api.example.com\"\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://api.example.com")
        );
    }
}

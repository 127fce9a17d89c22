use thiserror::Error;

#[derive(Error, Debug)]
pub enum DndError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status} for {endpoint}")]
    StatusError {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response from {endpoint}: {source}")]
    DecodeError {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInputError { field: String, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 網路、HTTP 狀態或回應解碼失敗
    Request,
    /// 使用者輸入的參數不合法
    Input,
    Configuration,
    System,
}

impl DndError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DndError::RequestError(_)
            | DndError::StatusError { .. }
            | DndError::DecodeError { .. } => ErrorCategory::Request,
            DndError::InvalidInputError { .. } => ErrorCategory::Input,
            DndError::TomlError(_)
            | DndError::ConfigError { .. }
            | DndError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DndError::IoError(_) | DndError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// True for every way a remote read can fail. Callers are not expected
    /// to tell network, status and decoding failures apart.
    pub fn is_request_failure(&self) -> bool {
        self.category() == ErrorCategory::Request
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DndError::RequestError(e) if e.is_connect() => {
                "Could not reach the D&D API".to_string()
            }
            DndError::RequestError(e) if e.is_decode() => {
                "The D&D API sent a response that could not be read".to_string()
            }
            DndError::RequestError(_) => "Request to the D&D API failed".to_string(),
            DndError::StatusError { status, .. } => {
                format!("The D&D API answered with an error ({})", status)
            }
            DndError::DecodeError { .. } => {
                "The D&D API sent a response that could not be read".to_string()
            }
            DndError::IoError(e) => format!("File error: {}", e),
            DndError::SerializationError(e) => format!("Could not format output: {}", e),
            DndError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            DndError::ConfigError { message } => format!("Configuration problem: {}", message),
            DndError::InvalidInputError { field, reason } => {
                format!("Invalid {}: {}", field, reason)
            }
            DndError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => {
                "Check your network connection and --base-url, then try again"
            }
            ErrorCategory::Input => "Check the command arguments and run again",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, DndError>;

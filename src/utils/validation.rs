use crate::utils::error::{DndError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DndError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DndError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DndError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Like [`validate_url`], but the address is a prefix for request paths and
/// may not carry a query string or fragment.
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str)?;

    let url = Url::parse(url_str).map_err(|e| DndError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(DndError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL cannot contain a query string or fragment".to_string(),
        });
    }
    Ok(())
}

/// Rejects blank command arguments such as a class or table name.
pub fn validate_input(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DndError::InvalidInputError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(DndError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("api.base_url", "http://localhost:8080/api").is_ok());
        assert!(validate_base_url("api.base_url", "http://localhost:8080?k=v").is_err());
        assert!(validate_base_url("api.base_url", "http://localhost:8080/#top").is_err());
        assert!(validate_base_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_input() {
        assert!(validate_input("name", "Wizard").is_ok());
        assert!(matches!(
            validate_input("name", "   "),
            Err(DndError::InvalidInputError { .. })
        ));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        let err = validate_one_of("logging.format", "xml", &["compact", "json"]).unwrap_err();
        assert!(err.to_string().contains("compact, json"));
    }
}

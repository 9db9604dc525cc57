use crate::utils::error::{AppError, Result};
use url::Url;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";
pub const URL_PREFIX_MESSAGE: &str = "URL must start with \"www\".";
pub const PROJECT_URL_PREFIX: &str = "www";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects the empty string only; whitespace counts as content.
pub fn validate_required_field(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::validation(field_name, REQUIRED_FIELDS_MESSAGE));
    }
    Ok(())
}

pub fn validate_url_prefix(field_name: &str, value: &str, prefix: &str) -> Result<()> {
    if !value.starts_with(prefix) {
        return Err(AppError::validation(field_name, URL_PREFIX_MESSAGE));
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::config(format!("{} cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::config(format!(
                "{}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(AppError::config(format!(
            "{}: invalid URL format: {}",
            field_name, e
        ))),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AppError::config(format!(
            "{} must be at least {}",
            field_name, min_value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        assert!(validate_required_field("title", "Portfolio").is_ok());
        assert!(validate_required_field("title", " ").is_ok());

        let err = validate_required_field("title", "").unwrap_err();
        assert_eq!(err.user_friendly_message(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_validate_url_prefix() {
        assert!(validate_url_prefix("url", "www.example.com", PROJECT_URL_PREFIX).is_ok());
        assert!(validate_url_prefix("url", "wwwexample", PROJECT_URL_PREFIX).is_ok());
        assert!(validate_url_prefix("url", "https://www.example.com", PROJECT_URL_PREFIX).is_err());
        assert!(validate_url_prefix("url", "WWW.example.com", PROJECT_URL_PREFIX).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:3000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }
}

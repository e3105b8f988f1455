use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)
                .context("MAX_BODY_BYTES must be a byte count")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_uses_default() {
        let port: u16 = parse_env("ATS_API_TEST_UNSET_PORT", 9090).unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_set_variable_is_parsed() {
        std::env::set_var("ATS_API_TEST_BODY_BYTES", " 2048 ");
        let bytes: usize = parse_env("ATS_API_TEST_BODY_BYTES", 1).unwrap();
        assert_eq!(bytes, 2048);
    }

    #[test]
    fn test_malformed_variable_is_an_error() {
        std::env::set_var("ATS_API_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("ATS_API_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("ATS_API_TEST_BAD_PORT"));
    }
}

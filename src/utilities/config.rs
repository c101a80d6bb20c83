use std::net::SocketAddr;
use std::{env, fmt};

use url::Url;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_FAL_API_URL: &str = "https://fal.run/fal-ai/flux-pro";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => {
                write!(formatter, "required environment variable {name} is not set")
            }
            Self::Invalid(name) => {
                write!(formatter, "environment variable {name} has an invalid value")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub telegram: TelegramConfig,
    pub storage: StorageConfig,
    pub fal: FalConfig,
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub api_url: String,
    pub token: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub key: String,
    pub bucket: String,
}

#[derive(Clone)]
pub struct FalConfig {
    pub url: String,
    pub key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: optional("BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
                .parse()
                .map_err(|_| ConfigError::Invalid("BIND_ADDR"))?,
            telegram: TelegramConfig {
                api_url: optional_url("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)?,
                token: required("TELEGRAM_TOKEN")?,
            },
            storage: StorageConfig {
                endpoint: required_url("SUPABASE_URL")?,
                key: required("SUPABASE_KEY")?,
                bucket: required("SUPABASE_BUCKET")?,
            },
            fal: FalConfig {
                url: optional_url("FAL_API_URL", DEFAULT_FAL_API_URL)?,
                key: required("FAL_API_KEY")?,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn optional(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_url(name: &'static str) -> Result<String, ConfigError> {
    validate_url(required(name)?, name)
}

fn optional_url(name: &'static str, default: &str) -> Result<String, ConfigError> {
    validate_url(optional(name).unwrap_or_else(|| default.into()), name)
}

fn validate_url(value: String, name: &'static str) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|_| ConfigError::Invalid(name))?;

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn urls_lose_their_trailing_slash() {
        assert_eq!(
            validate_url("https://example.supabase.co/".to_string(), "SUPABASE_URL").unwrap(),
            "https://example.supabase.co"
        );
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(matches!(
            validate_url("not a url".to_string(), "SUPABASE_URL"),
            Err(ConfigError::Invalid("SUPABASE_URL"))
        ));
    }

    #[test]
    fn error_messages_name_the_variable() {
        assert_eq!(
            ConfigError::Missing("TELEGRAM_TOKEN").to_string(),
            "required environment variable TELEGRAM_TOKEN is not set"
        );
    }
}

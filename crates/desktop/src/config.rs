//! Client configuration from the environment.
//!
//! | Variable              | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `SPEEDORZ_ENV`        | `development` (default) or `production`   |
//! | `SPEEDORZ_API_URL`    | API base URL; defaults per environment    |
//! | `SPEEDORZ_AUTH_TOKEN` | Bearer token; requests are anonymous without it |

use core::str::FromStr;

use thiserror::Error;

pub const ENV_VAR: &str = "SPEEDORZ_ENV";
pub const API_URL_VAR: &str = "SPEEDORZ_API_URL";
pub const AUTH_TOKEN_VAR: &str = "SPEEDORZ_AUTH_TOKEN";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown environment '{0}' (expected 'development' or 'production')")]
    UnknownEnvironment(String),
    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn default_api_url(self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:8080",
            Environment::Production => "http://speedorz.bucaramanga.upb.edu.co:8081",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub api_url: String,
    pub auth_token: Option<String>,
}

impl ClientConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup` (a variable name to value map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match lookup(ENV_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let api_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| environment.default_api_url().to_string());

        reqwest::Url::parse(&api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: api_url.clone(),
            reason: e.to_string(),
        })?;

        let auth_token = lookup(AUTH_TOKEN_VAR).filter(|v| !v.trim().is_empty());

        Ok(Self {
            environment,
            api_url,
            auth_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_local_development_backend() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.auth_token, None);
    }

    #[test]
    fn production_environment_switches_default_url() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_VAR, "production")])).unwrap();
        assert_eq!(config.api_url, "http://speedorz.bucaramanga.upb.edu.co:8081");
    }

    #[test]
    fn explicit_url_and_token_win() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_VAR, "prod"),
            (API_URL_VAR, "https://orders.example.com"),
            (AUTH_TOKEN_VAR, "jwt"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://orders.example.com");
        assert_eq!(config.auth_token.as_deref(), Some("jwt"));
    }

    #[test]
    fn rejects_unknown_environment_and_bad_url() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[(ENV_VAR, "staging")])),
            Err(ConfigError::UnknownEnvironment("staging".to_string()))
        );
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "not a url")])),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }
}

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub github: GithubConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GithubConfig {
    pub client_id: String,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Session storage key holding the access token
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
        }
    }
}

fn default_scopes() -> Vec<String> {
    vec!["user:email".to_string(), "repo".to_string()]
}

fn default_authorize_url() -> String {
    "https://github.com/login/oauth/authorize".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config value `{0}` must not be empty")]
    Empty(&'static str),
}

/// Configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Load the application configuration.
///
/// The embedded `config.toml` is parsed first; a `GITHUB_CLIENT_ID` set at
/// build time replaces its client id.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(client_id) = option_env!("GITHUB_CLIENT_ID") {
        log::info!("Using client id from GITHUB_CLIENT_ID");
        config.github.client_id = client_id.to_string();
    }
    config.validate()?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github.client_id.trim().is_empty() {
            return Err(ConfigError::Empty("github.client_id"));
        }
        if self.github.api_base.trim().is_empty() {
            return Err(ConfigError::Empty("github.api_base"));
        }
        if self.session.token_key.trim().is_empty() {
            return Err(ConfigError::Empty("session.token_key"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.github.scopes, vec!["user:email", "repo"]);
        assert_eq!(config.session.token_key, "token");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let config = parse_config("[github]\nclient_id = \"abc\"\n").unwrap();
        assert_eq!(config.github.client_id, "abc");
        assert_eq!(
            config.github.authorize_url,
            "https://github.com/login/oauth/authorize"
        );
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_empty_client_id_rejected() {
        let config = parse_config("[github]\nclient_id = \"  \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Empty("github.client_id"))
        ));
    }

    #[test]
    fn test_missing_client_id_is_parse_error() {
        assert!(matches!(
            parse_config("[github]\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}

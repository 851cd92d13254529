//! Gateway Configuration
//!
//! Where the remote store lives and which key to present. Values come from a
//! runtime JSON object or from environment variables captured at build time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default table holding the todo records
pub const DEFAULT_TABLE: &str = "todos";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gateway config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gateway url must start with http:// or https://, got '{0}'")]
    InvalidUrl(String),

    #[error("gateway anon key is empty")]
    MissingKey,

    #[error("gateway table name is empty")]
    MissingTable,
}

/// Connection settings for `RestGateway`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key
    #[serde(alias = "anonKey")]
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .field("table", &self.table)
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: default_table(),
        }
    }

    /// Parse and validate a JSON object `{ "url": .., "anon_key": .., "table"?: .. }`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GatewayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Settings captured from `TASKFLOW_SUPABASE_*` at compile time, if both url and key were set
    pub fn from_build_env() -> Option<Self> {
        let url = option_env!("TASKFLOW_SUPABASE_URL")?;
        let anon_key = option_env!("TASKFLOW_SUPABASE_ANON_KEY")?;
        let mut config = Self::new(url, anon_key);
        if let Some(table) = option_env!("TASKFLOW_SUPABASE_TABLE") {
            config.table = table.to_string();
        }
        Some(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(self.url.clone()));
        }
        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::MissingKey);
        }
        if self.table.trim().is_empty() {
            return Err(ConfigError::MissingTable);
        }
        Ok(())
    }

    /// REST endpoint of the table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim().trim_end_matches('/'), self.table.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults_table() {
        let config = GatewayConfig::from_json(r#"{"url":"https://abc.supabase.co","anon_key":"key"}"#).unwrap();
        assert_eq!(config.table, "todos");
        assert_eq!(config.table_url(), "https://abc.supabase.co/rest/v1/todos");
    }

    #[test]
    fn test_from_json_accepts_camel_case_key() {
        let config =
            GatewayConfig::from_json(r#"{"url":"https://abc.supabase.co/","anonKey":"key","table":"tasks"}"#).unwrap();
        assert_eq!(config.anon_key, "key");
        assert_eq!(config.table_url(), "https://abc.supabase.co/rest/v1/tasks");
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            GatewayConfig::new("abc.supabase.co", "key").validate(),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            GatewayConfig::new("https://abc.supabase.co", "  ").validate(),
            Err(ConfigError::MissingKey)
        ));
        let mut config = GatewayConfig::new("https://abc.supabase.co", "key");
        config.table = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::MissingTable)));
        assert!(matches!(GatewayConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new("https://abc.supabase.co", "secret-anon-key");
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-anon-key"));
    }
}

use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Holds no credentials: the provider key is entered by the user per submission.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_api_url: String,
    pub llm_timeout: Duration,
    pub llm_max_tokens: Option<u32>,
    pub require_qualifications: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            openai_api_url: lookup("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_timeout: Duration::from_secs(
                lookup("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            llm_max_tokens: lookup("LLM_MAX_TOKENS")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("LLM_MAX_TOKENS must be a positive integer")?,
            require_qualifications: lookup("REQUIRE_QUALIFICATIONS")
                .map(|v| parse_flag(&v))
                .transpose()?
                .unwrap_or(false),
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("REQUIRE_QUALIFICATIONS must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.openai_api_url, DEFAULT_API_URL);
        assert_eq!(config.llm_timeout, Duration::from_secs(120));
        assert_eq!(config.llm_max_tokens, None);
        assert!(!config.require_qualifications);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "3000"),
            ("OPENAI_API_URL", "http://localhost:9999/v1/chat/completions"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("LLM_MAX_TOKENS", "2000"),
            ("REQUIRE_QUALIFICATIONS", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.llm_max_tokens, Some(2000));
        assert!(config.require_qualifications);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("LLM_MAX_TOKENS", "-5")]).is_err());
        assert!(load(&[("REQUIRE_QUALIFICATIONS", "maybe")]).is_err());
    }
}

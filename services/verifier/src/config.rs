//! Service configuration
//!
//! Everything comes from environment variables. `OPENAI_API_KEY` is the only
//! switch that changes behavior: without it every proof gets a mock verdict.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BIND_ADDR: &str = "SKEPTIC_BIND_ADDR";
pub const ENV_BASE_URL: &str = "SKEPTIC_VISION_BASE_URL";
pub const ENV_MODEL: &str = "SKEPTIC_VISION_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "SKEPTIC_VISION_TIMEOUT_SECS";
pub const ENV_MOCK_DELAY_MS: &str = "SKEPTIC_MOCK_DELAY_MS";
pub const ENV_FALLBACK_DELAY_MS: &str = "SKEPTIC_FALLBACK_DELAY_MS";
pub const ENV_APPROVAL_RATE: &str = "SKEPTIC_MOCK_APPROVAL_RATE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{var} must be between 0 and 1, got {value}")]
    OutOfRange { var: &'static str, value: f64 },
}

#[derive(Clone, Debug)]
pub struct VerifierConfig {
    pub bind_addr: SocketAddr,
    /// Vision API credential; `None` selects mock verification.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API, without trailing slash.
    pub vision_base_url: String,
    pub vision_model: String,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    /// Pause before answering when no credential is configured.
    pub mock_delay: Duration,
    /// Pause before answering when the upstream call failed.
    pub fallback_delay: Duration,
    /// Probability that a mock verdict approves the proof.
    pub mock_approval_rate: f64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            api_key: None,
            vision_base_url: "https://api.openai.com/v1".to_string(),
            vision_model: "gpt-4o".to_string(),
            max_tokens: 300,
            request_timeout: Duration::from_secs(30),
            mock_delay: Duration::from_millis(1500),
            fallback_delay: Duration::from_millis(1000),
            mock_approval_rate: 0.7,
        }
    }
}

impl VerifierConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get(ENV_API_KEY);

        if let Some(raw) = get(ENV_BIND_ADDR) {
            config.bind_addr = parse(ENV_BIND_ADDR, "socket address", &raw)?;
        }
        if let Some(raw) = get(ENV_BASE_URL) {
            config.vision_base_url = raw.trim_end_matches('/').to_string();
        }
        if let Some(raw) = get(ENV_MODEL) {
            config.vision_model = raw;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.request_timeout =
                Duration::from_secs(parse(ENV_TIMEOUT_SECS, "number of seconds", &raw)?);
        }
        if let Some(raw) = get(ENV_MOCK_DELAY_MS) {
            config.mock_delay =
                Duration::from_millis(parse(ENV_MOCK_DELAY_MS, "number of milliseconds", &raw)?);
        }
        if let Some(raw) = get(ENV_FALLBACK_DELAY_MS) {
            config.fallback_delay = Duration::from_millis(parse(
                ENV_FALLBACK_DELAY_MS,
                "number of milliseconds",
                &raw,
            )?);
        }
        if let Some(raw) = get(ENV_APPROVAL_RATE) {
            let rate: f64 = parse(ENV_APPROVAL_RATE, "probability", &raw)?;
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::OutOfRange {
                    var: ENV_APPROVAL_RATE,
                    value: rate,
                });
            }
            config.mock_approval_rate = rate;
        }

        Ok(config)
    }

    pub fn uses_live_vision(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_means_mock_mode() {
        let config = VerifierConfig::from_lookup(lookup(&[])).unwrap();
        assert!(!config.uses_live_vision());
        assert_eq!(config.vision_model, "gpt-4o");
        assert_eq!(config.mock_delay, Duration::from_millis(1500));
        assert_eq!(config.fallback_delay, Duration::from_millis(1000));
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let config = VerifierConfig::from_lookup(lookup(&[(ENV_API_KEY, "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = VerifierConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_BIND_ADDR, "127.0.0.1:8080"),
            (ENV_BASE_URL, "http://localhost:9000/v1/"),
            (ENV_MOCK_DELAY_MS, "0"),
            (ENV_APPROVAL_RATE, "0.5"),
        ]))
        .unwrap();
        assert!(config.uses_live_vision());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.vision_base_url, "http://localhost:9000/v1");
        assert_eq!(config.mock_delay, Duration::ZERO);
        assert_eq!(config.mock_approval_rate, 0.5);
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = VerifierConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENV_TIMEOUT_SECS, .. }));
    }

    #[test]
    fn approval_rate_must_be_a_probability() {
        let err = VerifierConfig::from_lookup(lookup(&[(ENV_APPROVAL_RATE, "1.5")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfRange {
                var: ENV_APPROVAL_RATE,
                value: 1.5
            }
        );
    }
}

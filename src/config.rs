use crate::error::{Result, RosterError};
use std::env;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "ELASTIC_SEARCH_BASE_URL";
/// Name used by older `.env` files.
pub const LEGACY_BASE_URL_VAR: &str = "ELASTIC_SEARCH.BASE_URL";
pub const TIMEOUT_VAR: &str = "ENGINE_TIMEOUT_SECS";

/// Connection settings for the search engine. Immutable after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub base_url: String,
    /// `None` means requests wait for the engine indefinitely.
    pub timeout: Option<Duration>,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RosterError::Config(format!(
                "{} must not be empty",
                BASE_URL_VAR
            )));
        }
        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// ENGINE_TIMEOUT_SECS; unset or 0 disables the timeout.
    pub fn timeout_from_env() -> Result<Option<Duration>> {
        match env::var(TIMEOUT_VAR) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    RosterError::Config(format!("Invalid {}: {}", TIMEOUT_VAR, raw))
                })?;
                Ok((secs > 0).then(|| Duration::from_secs(secs)))
            }
            Err(_) => Ok(None),
        }
    }

    /// Load from environment variables.
    ///
    /// Required: ELASTIC_SEARCH_BASE_URL (or ELASTIC_SEARCH.BASE_URL)
    /// Optional: ENGINE_TIMEOUT_SECS (unset or 0 disables the timeout)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_VAR)
            .or_else(|_| env::var(LEGACY_BASE_URL_VAR))
            .map_err(|_| {
                RosterError::Config(format!(
                    "{} is required to reach the search engine",
                    BASE_URL_VAR
                ))
            })?;

        Ok(Self::new(base_url)?.with_timeout(Self::timeout_from_env()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(BASE_URL_VAR);
        env::remove_var(LEGACY_BASE_URL_VAR);
        env::remove_var(TIMEOUT_VAR);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        clear_env();
        env::set_var(BASE_URL_VAR, "http://localhost:9200/");

        let config = EngineConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:9200");
        assert_eq!(config.timeout, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_requires_base_url() {
        clear_env();
        let err = EngineConfig::from_env().unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_config_reads_legacy_name() {
        clear_env();
        env::set_var(LEGACY_BASE_URL_VAR, "http://es:9200");

        let config = EngineConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://es:9200");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_timeout() {
        clear_env();
        env::set_var(BASE_URL_VAR, "http://es:9200");
        env::set_var(TIMEOUT_VAR, "3");
        assert_eq!(
            EngineConfig::from_env().unwrap().timeout,
            Some(Duration::from_secs(3))
        );

        env::set_var(TIMEOUT_VAR, "0");
        assert_eq!(EngineConfig::from_env().unwrap().timeout, None);

        env::set_var(TIMEOUT_VAR, "soon");
        assert!(EngineConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_timeout_without_base_url() {
        clear_env();
        assert_eq!(EngineConfig::timeout_from_env().unwrap(), None);

        env::set_var(TIMEOUT_VAR, " 7 ");
        assert_eq!(
            EngineConfig::timeout_from_env().unwrap(),
            Some(Duration::from_secs(7))
        );

        env::set_var(TIMEOUT_VAR, "-1");
        assert!(matches!(
            EngineConfig::timeout_from_env(),
            Err(RosterError::Config(_))
        ));

        clear_env();
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(EngineConfig::new("  ").is_err());
    }
}

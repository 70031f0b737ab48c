use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "CLEMENTINE_API_URL";
pub const TIMEOUT_VAR: &str = "CLEMENTINE_HTTP_TIMEOUT_SECS";

/// Flask development server address
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base that relative endpoints resolve against
    pub api_url: String,
    /// Transport timeout; `None` leaves the HTTP client's defaults alone
    pub timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Build configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let api_url = match read_var(&lookup, API_URL_VAR)? {
            Some(url) => url,
            None => DEFAULT_API_URL.to_string(),
        };

        let timeout = match read_var(&lookup, TIMEOUT_VAR)? {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self { api_url, timeout })
    }
}

/// Unset and blank variables both count as absent
fn read_var<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, std::env::VarError>,
{
    match lookup(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Result<String, VarError> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var: &'static str| map.get(var).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_url_and_timeout() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, " http://stats.local:8080 "),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://stats.local:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let err = AppConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimeout {
                var: TIMEOUT_VAR,
                value: "soon".to_string()
            }
        );
    }
}

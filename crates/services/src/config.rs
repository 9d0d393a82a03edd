//! Runtime configuration read from the environment.

use std::env;

use academy_core::model::{CertificateNumber, PassThreshold};
use thiserror::Error;

pub const ENV_PASS_THRESHOLD: &str = "ACADEMY_PASS_THRESHOLD";
pub const ENV_CERT_PREFIX: &str = "ACADEMY_CERT_PREFIX";
pub const ENV_SAMPLE_HISTORY: &str = "ACADEMY_SAMPLE_HISTORY";

pub const DEFAULT_CERT_PREFIX: &str = "CERT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid pass threshold {raw:?}: expected a whole number between 0 and 100")]
    InvalidThreshold { raw: String },
    #[error("invalid certificate prefix {raw:?}: expected ASCII letters")]
    InvalidPrefix { raw: String },
    #[error("invalid value {raw:?} for {key}: expected true or false")]
    InvalidFlag { key: &'static str, raw: String },
}

/// Portal settings shared by the services and the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademyConfig {
    pub pass_threshold: PassThreshold,
    pub certificate_prefix: String,
    /// Give each new learner the demo results and certificates.
    pub sample_history: bool,
    pub verbose: bool,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            pass_threshold: PassThreshold::default(),
            certificate_prefix: DEFAULT_CERT_PREFIX.to_owned(),
            sample_history: true,
            verbose: false,
        }
    }
}

impl AcademyConfig {
    /// Read settings from `ACADEMY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AcademyConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_PASS_THRESHOLD) {
            config.pass_threshold = parse_threshold(&raw)?;
        }
        if let Some(raw) = lookup(ENV_CERT_PREFIX) {
            config.certificate_prefix = parse_prefix(&raw)?;
        }
        if let Some(raw) = lookup(ENV_SAMPLE_HISTORY) {
            config.sample_history = parse_flag(ENV_SAMPLE_HISTORY, &raw)?;
        }
        Ok(config)
    }
}

/// Parse a pass threshold percentage.
///
/// # Errors
///
/// Returns `ConfigError::InvalidThreshold` for non-numbers or values above 100.
pub fn parse_threshold(raw: &str) -> Result<PassThreshold, ConfigError> {
    let invalid = || ConfigError::InvalidThreshold { raw: raw.to_owned() };
    let value: u32 = raw.trim().parse().map_err(|_| invalid())?;
    PassThreshold::new(value).map_err(|_| invalid())
}

fn parse_prefix(raw: &str) -> Result<String, ConfigError> {
    // Borrow the certificate number rules so the prefix is valid at issue time.
    CertificateNumber::new(raw.trim(), 2000, 0)
        .map(|number| number.prefix().to_owned())
        .map_err(|_| ConfigError::InvalidPrefix { raw: raw.to_owned() })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            raw: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = AcademyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AcademyConfig::default());
        assert_eq!(config.pass_threshold.percent(), 70);
        assert_eq!(config.certificate_prefix, "CERT");
        assert!(config.sample_history);
    }

    #[test]
    fn reads_overrides() {
        let config = AcademyConfig::from_lookup(lookup(&[
            (ENV_PASS_THRESHOLD, " 80 "),
            (ENV_CERT_PREFIX, "acad"),
            (ENV_SAMPLE_HISTORY, "off"),
        ]))
        .unwrap();
        assert_eq!(config.pass_threshold.percent(), 80);
        assert_eq!(config.certificate_prefix, "ACAD");
        assert!(!config.sample_history);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            AcademyConfig::from_lookup(lookup(&[(ENV_PASS_THRESHOLD, "101")])),
            Err(ConfigError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            AcademyConfig::from_lookup(lookup(&[(ENV_PASS_THRESHOLD, "seventy")])),
            Err(ConfigError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            AcademyConfig::from_lookup(lookup(&[(ENV_CERT_PREFIX, "C-1")])),
            Err(ConfigError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            AcademyConfig::from_lookup(lookup(&[(ENV_SAMPLE_HISTORY, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert_eq!(parse_threshold("0").unwrap().percent(), 0);
        assert_eq!(parse_threshold("100").unwrap().percent(), 100);
    }
}

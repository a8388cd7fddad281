//! Runtime settings, read from the environment (and `.env` via dotenv).

use std::env;
use std::str::FromStr;

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
/// Default cap on a single command's stdout.
pub const MAX_OUTPUT_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    pub max_output_bytes: usize,
    /// Exit non-zero when any query failed.
    pub fail_on_errors: bool,
    /// `KEY=value` settings that could not be parsed and were replaced by defaults.
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: LOG_CONFIG_FILE.to_string(),
            max_output_bytes: MAX_OUTPUT_BYTES,
            fail_on_errors: false,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Config::default();
        let mut rejected = Vec::new();
        let max_output_bytes = parse_or(
            "AZCOUNT_MAX_OUTPUT_BYTES",
            lookup("AZCOUNT_MAX_OUTPUT_BYTES"),
            defaults.max_output_bytes,
            &mut rejected,
        );
        let fail_on_errors = parse_or(
            "AZCOUNT_FAIL_ON_ERRORS",
            lookup("AZCOUNT_FAIL_ON_ERRORS"),
            defaults.fail_on_errors,
            &mut rejected,
        );
        Config {
            log_config: lookup("AZCOUNT_LOG_CONFIG").unwrap_or(defaults.log_config),
            max_output_bytes,
            fail_on_errors,
            rejected,
        }
    }

    /// Warn about settings that fell back to defaults.
    ///
    /// Call once logging is initialised; the config is read before it.
    pub fn log_rejected(&self) {
        for setting in &self.rejected {
            log::warn!("ignoring invalid {setting}");
        }
    }
}

fn parse_or<T: FromStr>(
    key: &str,
    value: Option<String>,
    default: T,
    rejected: &mut Vec<String>,
) -> T {
    match value {
        None => default,
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            rejected.push(format!("{key}={v}"));
            default
        }),
    }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("AZCOUNT_LOG_CONFIG", "conf/log.yml"),
            ("AZCOUNT_MAX_OUTPUT_BYTES", "1024"),
            ("AZCOUNT_FAIL_ON_ERRORS", "true"),
        ]));
        assert_eq!(config.log_config, "conf/log.yml");
        assert_eq!(config.max_output_bytes, 1024);
        assert!(config.fail_on_errors);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let config = Config::from_lookup(lookup(&[
            ("AZCOUNT_FAIL_ON_ERRORS", "yes please"),
            ("AZCOUNT_MAX_OUTPUT_BYTES", "-5"),
        ]));
        assert!(!config.fail_on_errors);
        assert_eq!(config.max_output_bytes, MAX_OUTPUT_BYTES);
        assert_eq!(
            config.rejected,
            vec![
                "AZCOUNT_MAX_OUTPUT_BYTES=-5".to_string(),
                "AZCOUNT_FAIL_ON_ERRORS=yes please".to_string(),
            ]
        );
    }
}

//! Configuration management for the contact book.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "./contacts-data";
const DEFAULT_COUNTRY_CODE: &str = "+880";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per contact group
    pub data_dir: PathBuf,

    /// Default dialing prefix for WhatsApp links (default: "+880")
    pub default_country_code: String,

    /// Ask for a prefix when a number lacks the default one (default: true)
    pub always_ask_country_code: bool,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_DIR`: group store directory (default: `./contacts-data`)
    /// - `DEFAULT_COUNTRY_CODE`: dialing prefix, `+` optional (default: `+880`)
    /// - `ALWAYS_ASK_COUNTRY_CODE`: `true`/`false` (default: `true`)
    /// - `LOG_LEVEL`: logging level (default: `error`)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() is silent on stdout and fine to miss
        let _ = dotenvy::dotenv();

        let data_dir = env::var("CONTACTS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DATA_DIR".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let default_country_code =
            env::var("DEFAULT_COUNTRY_CODE").unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.to_string());
        let default_country_code = Self::validate_country_code(&default_country_code)?;

        let always_ask_country_code = Self::parse_env_bool("ALWAYS_ASK_COUNTRY_CODE", true)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            default_country_code,
            always_ask_country_code,
            log_level,
        })
    }

    /// Accepts `+880`, `880` or ` +1 `; returns the trimmed value.
    fn validate_country_code(raw: &str) -> ConfigResult<String> {
        let code = raw.trim();
        let digits = code.strip_prefix('+').unwrap_or(code);

        if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_COUNTRY_CODE".to_string(),
                reason: format!("Must be 1-4 digits with an optional '+', got: {}", raw),
            });
        }

        Ok(code.to_string())
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            always_ask_country_code: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "CONTACTS_DATA_DIR",
        "DEFAULT_COUNTRY_CODE",
        "ALWAYS_ASK_COUNTRY_CODE",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("./contacts-data"));
        assert_eq!(config.default_country_code, "+880");
        assert!(config.always_ask_country_code);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DATA_DIR", "/tmp/contacts");
        guard.set("DEFAULT_COUNTRY_CODE", " +44 ");
        guard.set("ALWAYS_ASK_COUNTRY_CODE", "No");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/contacts"));
        assert_eq!(config.default_country_code, "+44");
        assert!(!config.always_ask_country_code);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_country_code() {
        let mut guard = EnvGuard::new();
        guard.set("DEFAULT_COUNTRY_CODE", "+88O");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "DEFAULT_COUNTRY_CODE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_data_dir() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DATA_DIR", "   ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "CONTACTS_DATA_DIR"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_TRUE", "YES");
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_TRUE", false).unwrap());
        assert!(!Config::parse_env_bool("NONEXISTENT_BOOL", false).unwrap());
        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", true).is_err());
    }

    #[test]
    fn test_validate_country_code() {
        assert_eq!(Config::validate_country_code("880").unwrap(), "880");
        assert!(Config::validate_country_code("+").is_err());
        assert!(Config::validate_country_code("+12345").is_err());
    }
}

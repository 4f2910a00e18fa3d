//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

use ideaboard_ideas::ReferenceLists;

pub const ENV_SESSION_FILE: &str = "IDEABOARD_SESSION_FILE";
pub const ENV_PEOPLE: &str = "IDEABOARD_PEOPLE";
pub const ENV_GROUPS: &str = "IDEABOARD_GROUPS";
pub const ENV_SEED: &str = "IDEABOARD_SEED";
pub const ENV_LOG: &str = "IDEABOARD_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: expected true/false, got `{value}`")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the session identity is persisted.
    pub session_file: PathBuf,
    pub reference: ReferenceLists,
    /// Start the registry with the sample ideas.
    pub seed: bool,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            reference: ReferenceLists::default(),
            seed: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_file = lookup(ENV_SESSION_FILE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        let people = lookup(ENV_PEOPLE)
            .map(|v| split_list(&v))
            .unwrap_or_else(|| defaults.reference.people().to_vec());
        let groups = lookup(ENV_GROUPS)
            .map(|v| split_list(&v))
            .unwrap_or_else(|| defaults.reference.groups().to_vec());

        let seed = match lookup(ENV_SEED) {
            Some(value) => parse_bool(ENV_SEED, &value)?,
            None => defaults.seed,
        };

        let log_filter = lookup(ENV_LOG)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            session_file,
            reference: ReferenceLists::new(people, groups),
            seed,
            log_filter,
        })
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("ideaboard")
        .join("session.json")
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.session_file.ends_with("ideaboard/session.json"));
    }

    #[test]
    fn lists_are_split_and_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_PEOPLE, " Ada Lovelace, ,Alan Turing "),
            (ENV_GROUPS, "Research"),
        ]))
        .unwrap();

        assert_eq!(config.reference.people(), ["Ada Lovelace", "Alan Turing"]);
        assert_eq!(config.reference.groups(), ["Research"]);
    }

    #[test]
    fn seed_flag_parses_common_spellings() {
        for (raw, expected) in [("false", false), ("0", false), ("Yes", true), ("on", true)] {
            let config = AppConfig::from_lookup(lookup(&[(ENV_SEED, raw)])).unwrap();
            assert_eq!(config.seed, expected, "{raw}");
        }

        let err = AppConfig::from_lookup(lookup(&[(ENV_SEED, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: ENV_SEED,
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn session_file_and_log_filter_override() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_SESSION_FILE, "/tmp/custom/session.json"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.session_file, PathBuf::from("/tmp/custom/session.json"));
        assert_eq!(config.log_filter, "debug");
    }
}

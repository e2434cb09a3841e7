//! Environment configuration.
//!
//! `RPS_DATA_FILE` sets where scores are saved (an empty value keeps them in
//! memory only) and `RPS_FAST` skips the reveal delays.

use std::path::PathBuf;

use crate::store::STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON save file. `None` keeps the session in memory.
    pub data_file: Option<PathBuf>,
    /// Present rounds without pausing between reveal steps.
    pub fast_reveal: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = match lookup("RPS_DATA_FILE") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(format!("{}.json", STORAGE_KEY))),
        };
        let fast_reveal = lookup("RPS_FAST")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Config {
            data_file,
            fast_reveal,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::PathBuf};

    use super::Config;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        assert_eq!(
            config(&[]),
            Config {
                data_file: Some(PathBuf::from("rockScissorsPaperGame.json")),
                fast_reveal: false,
            }
        );
    }

    #[test]
    fn overrides() {
        let c = config(&[("RPS_DATA_FILE", "/tmp/scores.json"), ("RPS_FAST", "TRUE")]);
        assert_eq!(c.data_file, Some(PathBuf::from("/tmp/scores.json")));
        assert!(c.fast_reveal);

        let c = config(&[("RPS_DATA_FILE", ""), ("RPS_FAST", "0")]);
        assert_eq!(c.data_file, None);
        assert!(!c.fast_reveal);
    }
}

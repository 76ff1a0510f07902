//! CLI command handlers
//!
//! Each subcommand of the `air-mouse` binary is implemented here so the
//! binary itself only parses arguments and sets up logging.

pub mod replay;

pub use replay::{replay_trace, ReplayReport};

use crate::config::AirMouseConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the config file if one was given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<AirMouseConfig> {
    match path {
        Some(path) => AirMouseConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AirMouseConfig::default()),
    }
}

/// Default configuration as pretty JSON
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&AirMouseConfig::default()).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let json = default_config_json().unwrap();
        let parsed: AirMouseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AirMouseConfig::default());
        assert!(json.contains("\"clickDistance\": 0.05"));
    }

    #[test]
    fn test_load_config_without_path() {
        assert_eq!(load_config(None).unwrap(), AirMouseConfig::default());
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Runtime settings. Every field has a default, so a config file only needs
/// the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fps: f64,
    pub seed: Option<u64>,
    pub debug_hitboxes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 30.0,
            seed: None,
            debug_hitboxes: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// CLI flags win over file values.
    pub fn merged_with(mut self, cli: &Cli) -> Self {
        if let Some(fps) = cli.fps {
            self.fps = fps;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.debug_hitboxes {
            self.debug_hitboxes = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"fps": 60.0}"#).unwrap();
        assert_eq!(config.fps, 60.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn file_values_parse() {
        let config: Config =
            serde_json::from_str(r#"{"fps": 24.0, "seed": 7, "debug_hitboxes": true}"#).unwrap();
        assert_eq!(config.fps, 24.0);
        assert_eq!(config.seed, Some(7));
        assert!(config.debug_hitboxes);
    }

    #[test]
    fn cli_flags_override_the_file() {
        let cli = Cli {
            fps: Some(15.0),
            seed: Some(3),
            ..Cli::default()
        };
        let config = Config::default().merged_with(&cli);
        assert_eq!(config.fps, 15.0);
        assert_eq!(config.seed, Some(3));
        assert!(!config.debug_hitboxes);
    }
}

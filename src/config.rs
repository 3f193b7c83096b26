// File: src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::Locale;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_submit_timeout() -> u64 {
    30
}

fn default_busy_chance() -> f32 {
    0.2
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Seconds to wait for the scheduling collaborator before giving up
    /// on a single submit/retry call.
    #[serde(default = "default_submit_timeout")]
    pub submit_timeout_secs: u64,
    /// `None` lets the user answer conflict prompts indefinitely.
    #[serde(default)]
    pub max_reschedule_attempts: Option<u32>,
    /// Probability that the simulated calendar reports a free slot busy.
    #[serde(default = "default_busy_chance")]
    pub simulate_busy_chance: f32,
    /// Forces the keyword tables; unset means per-utterance detection.
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            submit_timeout_secs: 30,
            max_reschedule_attempts: None,
            simulate_busy_chance: 0.2,
            locale: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Explicitly detect missing file so callers can behave accordingly.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Missing config is not an error for the CLI; it just means defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(err) if Self::is_missing_config_error(&err) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Whether an anyhow::Error indicates that the config file was missing,
    /// checking both our explicit message and underlying IO NotFound errors
    /// anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }
        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let ctx = TestContext::new();
        assert!(Config::load(&ctx).is_err());
        let cfg = Config::load_or_default(&ctx).unwrap();
        assert_eq!(cfg.submit_timeout_secs, 30);
        assert!(cfg.locale.is_none());
    }

    #[test]
    fn round_trips_through_toml() {
        let ctx = TestContext::new();
        let cfg = Config {
            submit_timeout_secs: 5,
            max_reschedule_attempts: Some(3),
            simulate_busy_chance: 0.0,
            locale: Some(Locale::Zh),
        };
        cfg.save(&ctx).unwrap();
        let loaded = Config::load(&ctx).unwrap();
        assert_eq!(loaded.submit_timeout_secs, 5);
        assert_eq!(loaded.max_reschedule_attempts, Some(3));
        assert_eq!(loaded.locale, Some(Locale::Zh));
    }
}

use crate::browser::BrowserConfig;
use crate::extract::FieldPolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Service configuration, loaded from `config.toml` next to the binary
/// when present, with defaults otherwise.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub scraper: ScraperConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Run Chrome headless
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Navigation / default browser timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Budget for each wait-for-element loop in seconds
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_secs: u64,

    /// Pause between scroll rounds in seconds
    #[serde(default = "default_scroll_pause")]
    pub scroll_pause_secs: u64,

    /// Cap on scroll rounds; unset reproduces the unbounded reference
    /// behavior
    #[serde(default)]
    pub max_scroll_rounds: Option<u32>,

    /// Fail a record when a required field could not be extracted
    /// (otherwise missing fields become empty strings)
    #[serde(default = "default_true")]
    pub strict_fields: bool,
}

fn default_port() -> u16 {
    8080
}
fn default_true() -> bool {
    true
}
fn default_timeout() -> u64 {
    30
}
fn default_wait_timeout() -> u64 {
    10
}
fn default_scroll_pause() -> u64 {
    2
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: true,
            timeout_secs: 30,
            wait_timeout_secs: 10,
            scroll_pause_secs: 2,
            max_scroll_rounds: None,
            strict_fields: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            scraper: ScraperConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(cfg) = toml::from_str::<Config>(&content) {
                    return cfg;
                }
            }
        }
        Self::default()
    }

    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            headless: self.scraper.headless,
            timeout_seconds: self.scraper.timeout_secs,
            wait_timeout_seconds: self.scraper.wait_timeout_secs,
            scroll_pause_seconds: self.scraper.scroll_pause_secs,
            max_scroll_rounds: self.scraper.max_scroll_rounds,
            ..BrowserConfig::default()
        }
    }

    pub fn field_policy(&self) -> FieldPolicy {
        if self.scraper.strict_fields {
            FieldPolicy::Strict
        } else {
            FieldPolicy::BestEffort
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_unbounded() {
        let cfg = Config::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.field_policy(), FieldPolicy::Strict);
        assert_eq!(cfg.browser_config().max_scroll_rounds, None);
        assert_eq!(cfg.browser_config().scroll_pause_seconds, 2);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            port = 9000

            [scraper]
            strict_fields = false
            max_scroll_rounds = 25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.field_policy(), FieldPolicy::BestEffort);
        assert_eq!(cfg.scraper.max_scroll_rounds, Some(25));
        assert_eq!(cfg.scraper.wait_timeout_secs, 10);
    }
}

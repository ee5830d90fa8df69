use super::config::BrowserConfig;
use super::page::WaitCondition;
use super::tab::ChromeTab;
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;

/// Owns one headless Chrome process for the duration of a scrape.
///
/// The browser and its OS process are torn down when the manager drops,
/// so scoping the manager to the scrape guarantees teardown on every exit
/// path, error or not.
pub struct BrowserManager {
    browser: Browser,
    config: BrowserConfig,
}

impl BrowserManager {
    /// Launch a browser with the given configuration.
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        let launch_options = Self::build_launch_options(&config)?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::SessionStart(e.to_string()))?;

        Ok(Self { browser, config })
    }

    fn build_launch_options(config: &BrowserConfig) -> Result<LaunchOptions, BrowserError> {
        LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some(config.window_size))
            .build()
            .map_err(|e| BrowserError::SessionStart(e.to_string()))
    }

    /// Open a fresh tab bound to this browser.
    pub fn open_tab(&self) -> Result<ChromeTab, BrowserError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| BrowserError::SessionStart(e.to_string()))?;
        tab.set_default_timeout(self.config.timeout());
        Ok(ChromeTab::new(tab))
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

/// Errors raised by the browser layer.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// Browser binary unavailable or the process failed to launch. Fatal
    /// for the whole scrape of that URL.
    #[error("browser session could not be started: {0}")]
    SessionStart(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    /// An expected element never satisfied its condition within budget.
    #[error("timed out after {timeout:?} waiting for {locator} to be {condition}")]
    WaitTimeout {
        locator: String,
        condition: WaitCondition,
        timeout: Duration,
    },

    /// A required DOM node was absent after navigation or a wait succeeded.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("script evaluation failed: {0}")]
    Script(String),

    #[error("unexpected browser failure: {0}")]
    Unexpected(String),
}

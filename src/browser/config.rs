use std::time::Duration;

/// Tunables for a browser session and the extraction loops driven on it.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,

    /// Browser window size
    pub window_size: (u32, u32),

    /// Navigation / default browser timeout in seconds
    pub timeout_seconds: u64,

    /// Budget for a single wait-for-element loop, in seconds
    pub wait_timeout_seconds: u64,

    /// Interval between wait-loop probes, in milliseconds
    pub poll_interval_ms: u64,

    /// Pause after each scroll-to-bottom, giving lazy content time to
    /// render, in seconds
    pub scroll_pause_seconds: u64,

    /// Upper bound on scroll rounds. `None` means unbounded, which only
    /// terminates if the page eventually stops growing.
    pub max_scroll_rounds: Option<u32>,

    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            timeout_seconds: 30,
            wait_timeout_seconds: 10,
            poll_interval_ms: 100,
            scroll_pause_seconds: 2,
            max_scroll_rounds: None,
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl BrowserConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_seconds)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn scroll_pause(&self) -> Duration {
        Duration::from_secs(self.scroll_pause_seconds)
    }
}

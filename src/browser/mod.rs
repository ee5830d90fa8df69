//! Browser automation layer for the extraction pipeline.
//!
//! [`BrowserManager`] owns the headless Chrome process, [`Page`] is the
//! capability interface the pipeline is written against, and [`ChromeTab`]
//! is its concrete binding. [`wait_for`] and [`scroll_until_stable`] are
//! the two blocking loops used against asynchronously-rendered content.
//!
//! # Example
//!
//! ```no_run
//! use yt_channel_scraper::browser::{BrowserConfig, BrowserManager, Page};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = BrowserManager::new(BrowserConfig::default())?;
//! let mut page = manager.open_tab()?;
//! page.navigate("https://example.com")?;
//! println!("{} bytes of HTML", page.page_source()?.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod page;
pub mod scroll;
pub mod tab;
pub mod wait;

pub use config::BrowserConfig;
pub use manager::{BrowserError, BrowserManager};
pub use page::{Page, WaitCondition};
pub use scroll::scroll_until_stable;
pub use tab::ChromeTab;
pub use wait::wait_for;

//! Headless-browser scraper for YouTube channel and video metadata.
//!
//! The core is [`pipeline::ChannelScraper`]: it drives one browser
//! session through channel page → video listing → first video, extracts
//! channel stats, video metadata and a deduplicated comment list, and
//! assembles them into a [`models::ChannelRecord`]. The binary wraps the
//! pipeline in a small web API that accepts a batch of channel URLs and
//! returns the records as a downloadable JSON document.

pub mod browser;
pub mod comments;
pub mod config;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod selectors;
pub mod text;

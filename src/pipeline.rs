//! The channel/video extraction pipeline.
//!
//! One scrape drives a single browser session through channel page →
//! video listing → first video, collecting fields along the way:
//! channel stats must be read before navigating away from the channel
//! page, video fields only after the watch page's load wait, and the
//! description only after its expand toggle was clicked. Comments are
//! revealed by scrolling until the page height stabilizes, then parsed
//! and deduplicated.
//!
//! The browser process is owned by [`BrowserManager`] and torn down when
//! it drops, so teardown happens on every exit path.

use crate::browser::manager::{BrowserError, BrowserManager};
use crate::browser::page::{Page, WaitCondition};
use crate::browser::scroll::scroll_until_stable;
use crate::browser::wait::wait_for;
use crate::browser::BrowserConfig;
use crate::extract::{self, FieldPolicy, RecordParts};
use crate::models::ChannelRecord;
use crate::comments;
use crate::selectors as sel;
use log::{error, info, warn};

/// Errors surfaced by a whole scrape.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// One or more required fields failed to extract under the strict
    /// field policy.
    #[error("record is missing required fields: {}", missing.join(", "))]
    IncompleteRecord { missing: Vec<String> },
}

/// Scrapes one channel URL per invocation, each against a freshly
/// launched browser session.
pub struct ChannelScraper {
    config: BrowserConfig,
    policy: FieldPolicy,
}

impl ChannelScraper {
    pub fn new(config: BrowserConfig, policy: FieldPolicy) -> Self {
        Self { config, policy }
    }

    /// Launch a browser, run the pipeline against it, and tear the
    /// browser down regardless of the outcome.
    pub fn scrape(&self, channel_url: &str) -> Result<ChannelRecord, ScrapeError> {
        let manager = BrowserManager::new(self.config.clone())?;
        let mut page = manager.open_tab()?;
        // `manager` drops at the end of this scope on every path, which
        // terminates the Chrome process.
        self.run(&mut page, channel_url)
    }

    /// The pipeline itself, over any [`Page`] backend. Navigation and wait
    /// failures are fatal for the URL; individual field extraction
    /// failures are recorded as missing and resolved by the field policy
    /// at assembly.
    pub fn run<P: Page>(&self, page: &mut P, channel_url: &str) -> Result<ChannelRecord, ScrapeError> {
        let mut parts = RecordParts {
            channel_url: Some(channel_url.to_string()),
            ..RecordParts::default()
        };

        info!("loading channel page {}", channel_url);
        page.navigate(channel_url)?;
        parts.channel_name = self.field("channel_name", extract::channel_name(page));
        parts.total_videos = self.field("total_videos", extract::total_videos(page));

        let videos_url = format!("{}/videos", channel_url);
        info!("loading video listing {}", videos_url);
        page.navigate(&videos_url)?;
        wait_for(
            page,
            sel::FIRST_VIDEO_LINK,
            WaitCondition::Clickable,
            self.config.wait_timeout(),
            self.config.poll_interval(),
        )?;
        let video_url = page.attribute_of(sel::FIRST_VIDEO_LINK, "href")?;

        info!("loading first video {}", video_url);
        page.navigate(&video_url)?;
        parts.video_url = Some(video_url);

        parts.video_title = self.field("video_title", extract::video_title(page));
        parts.total_subscribers =
            self.field("total_subscribers", extract::subscriber_count(page));
        parts.video_likes = self.field("video_likes", extract::like_count(page));

        // The description box renders truncated until its toggle is
        // clicked; a failed expand still leaves the preview extractable.
        let expanded = wait_for(
            page,
            sel::DESCRIPTION_EXPAND,
            WaitCondition::Clickable,
            self.config.wait_timeout(),
            self.config.poll_interval(),
        )
        .and_then(|_| page.click(sel::DESCRIPTION_EXPAND));
        if let Err(e) = expanded {
            warn!("could not expand the description box: {}", e);
        }

        match extract::views_and_upload_date(page) {
            Ok((views, upload_date)) => {
                parts.video_views = Some(views);
                parts.video_upload_date = Some(upload_date);
            }
            Err(e) => error!("failed to extract video_views/video_upload_date: {}", e),
        }
        parts.video_description = self.field("video_description", extract::description(page));

        info!("scrolling to reveal all comments");
        let rounds = scroll_until_stable(
            page,
            self.config.scroll_pause(),
            self.config.max_scroll_rounds,
        )?;
        info!("page height stable after {} scroll rounds", rounds);

        match page.inner_html_of(sel::COMMENTS_CONTAINER) {
            Ok(html) => {
                let (authors, texts) = extract::comment_threads(&html);
                if authors.len() != texts.len() {
                    warn!(
                        "comment pairing mismatch: {} authors vs {} bodies, tail is dropped",
                        authors.len(),
                        texts.len()
                    );
                }
                parts.comments = comments::dedupe_comments(&authors, &texts);
                info!("kept {} unique comments", parts.comments.len());
            }
            Err(e) => warn!("comments section not extractable: {}", e),
        }

        extract::assemble(parts, self.policy)
    }

    fn field(&self, name: &str, value: Result<String, BrowserError>) -> Option<String> {
        match value {
            Ok(v) => Some(v),
            Err(e) => {
                error!("failed to extract {}: {}", name, e);
                None
            }
        }
    }
}

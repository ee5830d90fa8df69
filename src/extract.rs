//! Typed extraction steps over a rendered page, and the final record
//! assembly.
//!
//! Each extraction function takes the current page snapshot and returns a
//! normalized text value or an error naming the locator; none of them
//! navigate. Which fields get the lossy ASCII normalization and which
//! boilerplate labels get stripped mirrors the output format consumers
//! already depend on.

use crate::browser::manager::BrowserError;
use crate::browser::page::Page;
use crate::models::{ChannelRecord, CommentRecord, VideoRecord};
use crate::pipeline::ScrapeError;
use crate::selectors as sel;
use crate::text;
use scraper::{Html, Selector};

/// Channel name from the channel landing page. ASCII-normalized.
pub fn channel_name<P: Page>(page: &mut P) -> Result<String, BrowserError> {
    Ok(text::ascii_clean(&page.text_of(sel::CHANNEL_NAME)?))
}

/// Total video count from the channel landing page. Raw text.
pub fn total_videos<P: Page>(page: &mut P) -> Result<String, BrowserError> {
    page.text_of(sel::VIDEOS_COUNT)
}

/// Video title from the watch page. ASCII-normalized.
pub fn video_title<P: Page>(page: &mut P) -> Result<String, BrowserError> {
    Ok(text::ascii_clean(&page.text_of(sel::VIDEO_TITLE)?))
}

/// Channel-owner subscriber count from the watch page, with the
/// " subscribers" label stripped.
pub fn subscriber_count<P: Page>(page: &mut P) -> Result<String, BrowserError> {
    Ok(text::strip_label(
        &page.text_of(sel::OWNER_SUB_COUNT)?,
        " subscribers",
    ))
}

/// Like-button text from the watch page. Raw text.
pub fn like_count<P: Page>(page: &mut P) -> Result<String, BrowserError> {
    page.text_of(sel::LIKE_BUTTON)
}

/// View count and upload date from the description info row: the first
/// span is the view count (label stripped), the third the upload date.
pub fn views_and_upload_date<P: Page>(page: &mut P) -> Result<(String, String), BrowserError> {
    let spans = page.texts_of(sel::INFO_SPANS)?;
    let views = spans
        .first()
        .ok_or_else(|| BrowserError::ElementNotFound(sel::INFO_SPANS.to_string()))?;
    let upload_date = spans
        .get(2)
        .ok_or_else(|| BrowserError::ElementNotFound(sel::INFO_SPANS.to_string()))?;
    Ok((text::strip_label(views, " views"), upload_date.clone()))
}

/// Full description text. Only complete after the expand toggle was
/// clicked; reading it earlier yields the truncated preview. ASCII-normalized.
pub fn description<P: Page>(page: &mut P) -> Result<String, BrowserError> {
    Ok(text::ascii_clean(&page.text_of(sel::DESCRIPTION_TEXT)?))
}

/// Parse the comments container HTML into parallel author and body lists,
/// in document order. Pairing and deduplication happen downstream in
/// [`crate::comments::dedupe_comments`].
pub fn comment_threads(html: &str) -> (Vec<String>, Vec<String>) {
    let document = Html::parse_fragment(html);
    let author_sel = Selector::parse(sel::COMMENT_AUTHOR).unwrap();
    let text_sel = Selector::parse(sel::COMMENT_TEXT).unwrap();

    let authors = document
        .select(&author_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();
    let texts = document
        .select(&text_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    (authors, texts)
}

/// What to do when a required field failed to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Fail the whole record with [`ScrapeError::IncompleteRecord`].
    Strict,
    /// Substitute empty strings and return whatever was extracted.
    BestEffort,
}

/// Per-field extraction outcomes, collected by the pipeline before
/// assembly. `None` means that step failed.
#[derive(Debug, Default)]
pub struct RecordParts {
    pub channel_name: Option<String>,
    pub total_videos: Option<String>,
    pub total_subscribers: Option<String>,
    pub channel_url: Option<String>,
    pub video_title: Option<String>,
    pub video_views: Option<String>,
    pub video_description: Option<String>,
    pub video_upload_date: Option<String>,
    pub video_likes: Option<String>,
    pub video_url: Option<String>,
    pub comments: Vec<CommentRecord>,
}

/// Compose the extracted fields into one immutable [`ChannelRecord`].
///
/// Pure composition, no I/O. Under [`FieldPolicy::Strict`] every missing
/// field is aggregated into a single [`ScrapeError::IncompleteRecord`];
/// under [`FieldPolicy::BestEffort`] missing fields become empty strings.
pub fn assemble(parts: RecordParts, policy: FieldPolicy) -> Result<ChannelRecord, ScrapeError> {
    let mut missing: Vec<String> = Vec::new();
    let mut take = |value: Option<String>, name: &str| -> String {
        match value {
            Some(v) => v,
            None => {
                missing.push(name.to_string());
                String::new()
            }
        }
    };

    let record = ChannelRecord {
        channel_name: take(parts.channel_name, "channel_name"),
        total_videos: take(parts.total_videos, "total_videos"),
        total_subscribers: take(parts.total_subscribers, "total_subscribers"),
        channel_url: take(parts.channel_url, "channel_url"),
        video: VideoRecord {
            title: take(parts.video_title, "video_title"),
            views: take(parts.video_views, "video_views"),
            description: take(parts.video_description, "video_description"),
            upload_date: take(parts.video_upload_date, "video_upload_date"),
            likes: take(parts.video_likes, "video_likes"),
            url: take(parts.video_url, "video_url"),
            comments: parts.comments,
        },
    };

    if policy == FieldPolicy::Strict && !missing.is_empty() {
        return Err(ScrapeError::IncompleteRecord { missing });
    }

    Ok(record)
}

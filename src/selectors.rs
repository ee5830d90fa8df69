//! CSS locators for the YouTube channel and watch pages.
//!
//! These track the current YouTube DOM and are the first thing to check
//! when extraction starts coming back empty.

/// Channel name on the channel landing page.
pub const CHANNEL_NAME: &str = "yt-formatted-string#text";

/// Total video count on the channel landing page.
pub const VIDEOS_COUNT: &str = "yt-formatted-string#videos-count span";

/// First video tile link on the `/videos` listing.
pub const FIRST_VIDEO_LINK: &str = "ytd-rich-grid-media a[href]";

/// Video title on the watch page.
pub const VIDEO_TITLE: &str = "h1.ytd-watch-metadata";

/// Subscriber count inside the watch page owner block.
pub const OWNER_SUB_COUNT: &str = "#owner #owner-sub-count";

/// Like button text on the watch page.
pub const LIKE_BUTTON: &str = ".YtLikeButtonViewModelHost";

/// Toggle that expands the truncated description box. Must be clicked
/// before the full description is readable.
pub const DESCRIPTION_EXPAND: &str = "#expand";

/// Spans inside the description info row; index 0 is the view count,
/// index 2 the upload date.
pub const INFO_SPANS: &str = "#info-container span";

/// Full description text, valid only after the expand toggle was clicked.
pub const DESCRIPTION_TEXT: &str =
    "#description-inline-expander .ytd-text-inline-expander span span";

/// Container holding all lazily-loaded comment threads.
pub const COMMENTS_CONTAINER: &str =
    "ytd-comments#comments ytd-item-section-renderer#sections div#contents";

/// Comment author link, within the comments container HTML.
pub const COMMENT_AUTHOR: &str = "a#author-text";

/// Comment body, within the comments container HTML.
pub const COMMENT_TEXT: &str = "yt-formatted-string.style-scope.ytd-comment-renderer";

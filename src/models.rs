use serde::{Deserialize, Serialize};

/// Everything scraped for one channel URL. Built once per scrape, never
/// mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChannelRecord {
    pub channel_name: String,
    pub total_videos: String,
    pub total_subscribers: String,
    pub channel_url: String,
    pub video: VideoRecord,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VideoRecord {
    #[serde(rename = "video_title")]
    pub title: String,
    #[serde(rename = "video_views")]
    pub views: String,
    #[serde(rename = "video_description")]
    pub description: String,
    #[serde(rename = "video_upload_date")]
    pub upload_date: String,
    #[serde(rename = "video_likes")]
    pub likes: String,
    #[serde(rename = "video_url")]
    pub url: String,
    pub comments: Vec<CommentRecord>,
}

/// A single comment. Equality is by value over the author/text pair, which
/// is what comment deduplication keys on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    #[serde(rename = "comment_author")]
    pub author: String,
    #[serde(rename = "comment_text")]
    pub text: String,
}

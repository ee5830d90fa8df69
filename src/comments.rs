//! Positional pairing and deduplication of scraped comments.

use crate::models::CommentRecord;
use crate::text;

/// Pair author and body lists by index and fold them into a unique,
/// order-preserving comment list.
///
/// Pairing stops at the shorter list, so a length mismatch silently drops
/// the tail; the caller is expected to log that mismatch. Both halves are
/// normalized (ASCII-only, line breaks removed) before comparison, and a
/// pair is appended only if an identical author/text pair is not already
/// present. First occurrence wins its position. The duplicate scan is
/// linear per comment, which is fine at comment-page sizes.
pub fn dedupe_comments(authors: &[String], texts: &[String]) -> Vec<CommentRecord> {
    let mut comments: Vec<CommentRecord> = Vec::new();

    for (author, body) in authors.iter().zip(texts.iter()) {
        let record = CommentRecord {
            author: text::comment_clean(author),
            text: text::comment_clean(body),
        };
        if !comments.contains(&record) {
            comments.push(record);
        }
    }

    comments
}

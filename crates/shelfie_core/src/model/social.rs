//! Social records: follow candidates and the reading feed.

use serde::{Deserialize, Serialize};

/// One user in the follow/search lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: i64,
    pub username: String,
    pub name: String,
    /// Patched locally by the follow/unfollow mutation.
    #[serde(rename = "isFollowing", default)]
    pub is_following: bool,
}

/// One entry in the reading feed: a followed user finished a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub hasread_id: i64,
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub book_id: i64,
    pub book_title: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub date: String,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub page_length: Option<i64>,
}

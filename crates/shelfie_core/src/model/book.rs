//! Book and reading-history records.

use serde::{Deserialize, Serialize};

/// One book in the personal library view.
///
/// `letter` is the uppercase first letter of the title, precomputed by the
/// backend and used by the alphabet filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "coverUrl", default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub letter: String,
    /// Set locally by the star/unstar mutation; absent until first patched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub page_length: Option<i64>,
}

impl Book {
    /// Uppercase first letter of a title, `?` for empty titles.
    ///
    /// Mirrors the backend's derivation so locally appended books group
    /// under the same alphabet bucket the server would assign.
    pub fn letter_of(title: &str) -> String {
        title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Add-book form payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub author_dob: Option<String>,
    pub issue: Option<String>,
    pub page_length: Option<i64>,
    pub cover_url: Option<String>,
    pub publisher: String,
}

/// One completed book in the reading history, with its review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasReadBook {
    pub book_id: i64,
    pub title: String,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub page_length: Option<i64>,
    #[serde(default)]
    pub review: Option<String>,
    pub date: String,
    #[serde(default)]
    pub hasread_id: Option<i64>,
}

//! Aggregated statistics records: rankings, per-author stats, challenges.

use serde::{Deserialize, Serialize};

use super::lenient_f64;

/// The most-read book of one year in the global rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostReadBook {
    #[serde(default)]
    pub book_id: i64,
    pub title: String,
    pub read_count: i64,
}

/// Rankings response for one year; `book` is absent for years without reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRanking {
    #[serde(default)]
    pub book: Option<MostReadBook>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub message: Option<String>,
}

/// Per-author aggregate over the user's library.
///
/// Page-length aggregates arrive as DECIMAL strings from the backend, hence
/// the lenient decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub author_name: String,
    pub num_books: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_page_length: Option<f64>,
    #[serde(default)]
    pub min_book_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_page_length: Option<f64>,
    #[serde(default)]
    pub max_book_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_page_length: Option<f64>,
}

/// Headline reading statistics for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingStats {
    #[serde(default)]
    pub total_books: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_pages: Option<f64>,
    #[serde(default)]
    pub favorite_author: Option<String>,
    #[serde(default)]
    pub first_book: Option<String>,
    #[serde(default)]
    pub latest_book: Option<String>,
}

/// Progress on one reading challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub completed: bool,
    pub progress: i64,
}

impl Challenge {
    /// Progress toward `target` as a percentage, clamped to 100.
    pub fn percent_of(&self, target: i64) -> f64 {
        if target <= 0 {
            return 0.0;
        }
        ((self.progress as f64 / target as f64) * 100.0).min(100.0)
    }
}

/// The fixed set of reading challenges tracked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSet {
    pub read_12_books_this_year: Challenge,
    pub read_3_books_by_same_author: Challenge,
    pub read_5000_pages: Challenge,
}

/// A challenge with its display title and target, for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChallengeEntry<'a> {
    pub key: &'static str,
    pub title: &'static str,
    pub target: i64,
    pub challenge: &'a Challenge,
}

impl ChallengeSet {
    /// Challenges in display order with their targets.
    pub fn entries(&self) -> [ChallengeEntry<'_>; 3] {
        [
            ChallengeEntry {
                key: "read_12_books_this_year",
                title: "Read 12 books this year",
                target: 12,
                challenge: &self.read_12_books_this_year,
            },
            ChallengeEntry {
                key: "read_3_books_by_same_author",
                title: "Read 3 books by the same author",
                target: 3,
                challenge: &self.read_3_books_by_same_author,
            },
            ChallengeEntry {
                key: "read_5000_pages",
                title: "Read books totaling 5000+ pages",
                target: 5000,
                challenge: &self.read_5000_pages,
            },
        ]
    }
}

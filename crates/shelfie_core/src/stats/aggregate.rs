//! Pure reducers over collection lists.
//!
//! # Invariants
//! - An empty list averages to `0.0`, never NaN.
//! - `top_by` breaks ties on first occurrence in the current order, so
//!   the pick is stable for any input ordering.

use crate::model::book::HasReadBook;

pub fn count<T>(items: &[T]) -> usize {
    items.len()
}

pub fn sum_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(value).sum()
}

pub fn average_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    sum_by(items, value) / items.len() as f64
}

/// Returns the item with the largest key. Later items win only on a
/// strictly larger key.
pub fn top_by<'a, T, K, F>(items: &'a [T], key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let candidate = key(item);
        match &best {
            Some((_, current)) if candidate <= *current => {}
            _ => best = Some((item, candidate)),
        }
    }
    best.map(|(item, _)| item)
}

/// Headline numbers for a user's read history.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSummary {
    pub total_books: usize,
    pub total_pages: f64,
    pub avg_pages: f64,
    /// Title of the longest book with a known page count; ties go to the
    /// earlier entry.
    pub longest_book: Option<String>,
}

impl ReadingSummary {
    pub fn from_books(books: &[HasReadBook]) -> Self {
        let pages = |b: &HasReadBook| b.page_length.unwrap_or(0) as f64;
        let paged: Vec<&HasReadBook> = books.iter().filter(|b| b.page_length.is_some()).collect();
        Self {
            total_books: count(books),
            total_pages: sum_by(books, pages),
            avg_pages: average_by(books, pages),
            longest_book: top_by(&paged, |b| b.page_length.unwrap_or(0))
                .map(|b| b.title.clone()),
        }
    }
}

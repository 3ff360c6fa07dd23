//! List transform engine: pure filtering and stable sorting over fetched
//! collections.
//!
//! # Responsibility
//! - Evaluate filter predicates and a single-field sort over any item type
//!   that exposes its fields through [`FieldLookup`].
//! - Stay pure: the displayed list is always a function of the source items
//!   and the current [`Criteria`], never a diverging cached copy.
//!
//! # Invariants
//! - Sorting is stable; equal keys keep their fetched order.
//! - A missing field compares below every present value, so the output
//!   order is deterministic even for partially-missing data.
//! - Applying the same criteria twice yields the same list as applying it
//!   once.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use regex::{Regex, RegexBuilder};

use crate::model::book::{Book, HasReadBook};
use crate::model::social::{FeedEntry, UserSummary};

/// A field value lifted out of a collection item for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The item has no value for the field.
    Missing,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Parses a date-like string, falling back to `Missing` when no known
    /// format matches.
    pub fn date_from_str(raw: &str) -> Self {
        match parse_timestamp(raw) {
            Some(instant) => Self::Date(instant),
            None => Self::Missing,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Text(_) => 1,
            Self::Number(_) => 2,
            Self::Date(_) => 3,
        }
    }

    /// Total order used by the sorter. Missing values rank below every
    /// present value; mixed kinds order by kind so the result stays
    /// deterministic.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Less,
            (_, Self::Missing) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

/// Parses the timestamp formats the backend is known to emit.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.naive_utc());
    }
    if let Ok(instant) = chrono::DateTime::parse_from_rfc2822(trimmed) {
        return Some(instant.naive_utc());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(instant);
    }
    if let Ok(day) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }
    None
}

/// Exposes named fields of a collection item to the transform engine.
pub trait FieldLookup {
    fn field(&self, name: &str) -> FieldValue;
}

impl FieldLookup for Book {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "title" => FieldValue::text(&self.title),
            "author" => FieldValue::text(&self.author),
            "letter" => FieldValue::text(&self.letter),
            "issue" => match &self.issue {
                Some(issue) => FieldValue::text(issue),
                None => FieldValue::Missing,
            },
            "page_length" => match self.page_length {
                Some(pages) => FieldValue::Number(pages as f64),
                None => FieldValue::Missing,
            },
            _ => FieldValue::Missing,
        }
    }
}

impl FieldLookup for HasReadBook {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "title" => FieldValue::text(&self.title),
            "date" => FieldValue::date_from_str(&self.date),
            "page_length" => match self.page_length {
                Some(pages) => FieldValue::Number(pages as f64),
                None => FieldValue::Missing,
            },
            "review" => match &self.review {
                Some(review) => FieldValue::text(review),
                None => FieldValue::Missing,
            },
            _ => FieldValue::Missing,
        }
    }
}

impl FieldLookup for UserSummary {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "username" => FieldValue::text(&self.username),
            "name" => FieldValue::text(&self.name),
            _ => FieldValue::Missing,
        }
    }
}

impl FieldLookup for FeedEntry {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "username" => FieldValue::text(&self.username),
            "book_title" => FieldValue::text(&self.book_title),
            "date" => FieldValue::date_from_str(&self.date),
            _ => FieldValue::Missing,
        }
    }
}

/// A single filter predicate over one field.
#[derive(Debug, Clone)]
pub enum FilterRule {
    /// Case-insensitive exact match on a text field.
    Equals { field: String, value: String },
    /// Inclusive numeric range; a missing field never matches.
    NumberRange { field: String, min: f64, max: f64 },
    /// Case-insensitive substring match.
    Contains { field: String, matcher: Regex },
    /// Case-insensitive prefix match.
    StartsWith { field: String, matcher: Regex },
}

impl FilterRule {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn number_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self::NumberRange {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn contains(field: impl Into<String>, needle: &str) -> Self {
        Self::Contains {
            field: field.into(),
            matcher: literal_matcher(needle, false),
        }
    }

    pub fn starts_with(field: impl Into<String>, prefix: &str) -> Self {
        Self::StartsWith {
            field: field.into(),
            matcher: literal_matcher(prefix, true),
        }
    }

    fn matches(&self, item: &impl FieldLookup) -> bool {
        match self {
            Self::Equals { field, value } => match item.field(field) {
                FieldValue::Text(text) => text.to_lowercase() == value.to_lowercase(),
                _ => false,
            },
            Self::NumberRange { field, min, max } => match item.field(field) {
                FieldValue::Number(n) => *min <= n && n <= *max,
                _ => false,
            },
            Self::Contains { field, matcher } | Self::StartsWith { field, matcher } => {
                match item.field(field) {
                    FieldValue::Text(text) => matcher.is_match(&text),
                    _ => false,
                }
            }
        }
    }
}

fn literal_matcher(needle: &str, anchored: bool) -> Regex {
    let escaped = regex::escape(needle);
    let source = if anchored {
        format!("^{escaped}")
    } else {
        escaped
    };
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .expect("escaped literal is a valid pattern")
}

/// Which end of the comparator wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-field sort order.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Filter rules plus an optional sort, built fluently.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    filters: Vec<FilterRule>,
    sort: Option<SortSpec>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, rule: FilterRule) -> Self {
        self.filters.push(rule);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }
}

/// Applies `criteria` to `items` and returns the ordered survivors.
///
/// Pure over its inputs; calling it on its own output with the same
/// criteria returns the same list.
pub fn filter_and_sort<T>(items: &[T], criteria: &Criteria) -> Vec<T>
where
    T: FieldLookup + Clone,
{
    let mut kept: Vec<T> = items
        .iter()
        .filter(|item| criteria.filters.iter().all(|rule| rule.matches(*item)))
        .cloned()
        .collect();
    if let Some(sort) = &criteria.sort {
        kept.sort_by(|a, b| {
            let ordering = a.field(&sort.field).compare(&b.field(&sort.field));
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    kept
}

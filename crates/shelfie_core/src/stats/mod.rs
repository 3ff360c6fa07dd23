//! Derived stats aggregator: pure reducers and display formatting over
//! fetched reading data.
//!
//! # Responsibility
//! - Reduce `Ready` lists to counts, sums, averages and top picks without
//!   touching the network.
//! - Format per-item representations shared by several screens, including
//!   the relative date labels shown on the feed and history.

pub mod aggregate;
pub mod format;

pub use aggregate::{average_by, count, sum_by, top_by, ReadingSummary};
pub use format::{
    format_avg_pages, format_book_info, format_page_count, format_page_length,
    relative_date_label,
};

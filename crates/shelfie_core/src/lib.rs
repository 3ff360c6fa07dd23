//! Core data-synchronization logic for Shelfie.
//! This crate is the single source of truth for fetch sequencing, list
//! transforms, optimistic mutations and derived reading statistics.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod mutation;
pub mod service;
pub mod session;
pub mod stats;
pub mod transform;
pub mod viewstate;

pub use config::ShelfieConfig;
pub use gateway::{
    ApiRequest, Envelope, FetchError, Gateway, GatewayResult, HttpGateway, Method,
    PreparedRequest,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, HasReadBook, NewBook};
pub use model::social::{FeedEntry, UserSummary};
pub use model::stats::{AuthorStats, Challenge, ChallengeSet, MostReadBook, ReadingStats, YearRanking};
pub use mutation::{MutationController, MutationError, MutationKind};
pub use service::auth::AuthService;
pub use service::feed::FeedService;
pub use service::history::{HistoryService, HistorySortField};
pub use service::insights::InsightsService;
pub use service::library::LibraryService;
pub use service::social::SocialService;
pub use session::SessionIdentity;
pub use transform::{filter_and_sort, Criteria, FieldLookup, FieldValue, FilterRule, SortDirection};
pub use viewstate::{ApplyOutcome, FetchToken, ListViewState, ViewState, ViewStatus};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

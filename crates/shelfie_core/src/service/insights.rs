//! Insights use-cases: reading statistics, per-author aggregates, yearly
//! rankings and reading challenges.

use chrono::{Datelike, Utc};

use crate::gateway::{endpoints, Gateway, GatewayResult};
use crate::model::stats::{AuthorStats, ChallengeSet, ReadingStats, YearRanking};
use crate::session::SessionIdentity;
use crate::viewstate::{ListViewState, ViewState};

use super::{decode, decode_list, fetch_list, fetch_one, fetch_value};

const LOGIN_MESSAGE: &str = "Please log in to view your reading insights";

pub struct InsightsService<G> {
    gateway: G,
}

impl<G: Gateway> InsightsService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn refresh_reading_stats(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ViewState<Option<ReadingStats>>,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = endpoints::reading_stats(session);
        let token = state.begin_fetch();
        let result = fetch_one(&self.gateway, &prepared).map(Some);
        state.apply_result(token, result);
    }

    pub fn refresh_author_stats(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<AuthorStats>,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = endpoints::author_stats(session);
        let token = state.begin_fetch();
        let result = fetch_list(&self.gateway, &prepared);
        state.apply_result(token, result);
    }

    /// The rankings screen needs no session; the most-read book is global.
    pub fn refresh_most_read(&self, state: &mut ViewState<Option<YearRanking>>, year: i32) {
        let token = state.begin_fetch();
        let result = fetch_value(&self.gateway, &endpoints::most_read_book(year))
            .and_then(decode)
            .map(|mut ranking: YearRanking| {
                if ranking.year == 0 {
                    ranking.year = year;
                }
                Some(ranking)
            });
        state.apply_result(token, result);
    }

    pub fn available_years(&self) -> GatewayResult<Vec<i32>> {
        let value = fetch_value(&self.gateway, &endpoints::available_years())?;
        decode_list(value.get("years").cloned().unwrap_or_default())
    }

    pub fn refresh_challenges(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ViewState<Option<ChallengeSet>>,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = endpoints::reading_challenges(session);
        let token = state.begin_fetch();
        let result = fetch_one(&self.gateway, &prepared).map(Some);
        state.apply_result(token, result);
    }
}

/// The four most recent years, shown when the backend cannot list the
/// years that actually have data.
pub fn fallback_years() -> Vec<i32> {
    let current = Utc::now().year();
    (0..4).map(|back| current - back).collect()
}

#[cfg(test)]
mod tests {
    use super::fallback_years;

    #[test]
    fn fallback_years_runs_backwards_from_the_current_year() {
        let years = fallback_years();
        assert_eq!(years.len(), 4);
        assert_eq!(years[0] - years[3], 3);
    }
}

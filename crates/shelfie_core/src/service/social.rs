//! Social screen use-cases: follow suggestions, user search and the
//! follow/unfollow writes.
//!
//! A user can appear in both the suggestion list and the search results at
//! once, so follow state is patched across both lists together.

use crate::gateway::{endpoints, Gateway};
use crate::model::social::UserSummary;
use crate::mutation::{MutationController, MutationError, MutationKind};
use crate::session::SessionIdentity;
use crate::viewstate::ListViewState;

use super::{fetch_list, fetch_value};

const LOGIN_MESSAGE: &str = "Please log in to find readers to follow";

pub struct SocialService<G> {
    gateway: G,
    mutations: MutationController,
}

impl<G: Gateway> SocialService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            mutations: MutationController::new(),
        }
    }

    pub fn refresh_suggestions(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<UserSummary>,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = endpoints::users_to_follow(session);
        let token = state.begin_fetch();
        let result = fetch_list(&self.gateway, &prepared);
        state.apply_result(token, result);
    }

    /// An empty query resolves to an empty result without a network call.
    pub fn search_users(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<UserSummary>,
        query: &str,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let token = state.begin_fetch();
        if query.trim().is_empty() {
            state.apply_result(token, Ok(Vec::new()));
            return;
        }
        let result = fetch_list(&self.gateway, &endpoints::search_users(session, query));
        state.apply_result(token, result);
    }

    pub fn follow(
        &mut self,
        session: &SessionIdentity,
        suggestions: &mut ListViewState<UserSummary>,
        results: &mut ListViewState<UserSummary>,
        followee_id: i64,
    ) -> Result<(), MutationError> {
        let gateway = &self.gateway;
        let prepared = endpoints::follow(session, followee_id);
        self.mutations.apply(
            followee_id,
            MutationKind::Follow,
            &mut [suggestions.payload_mut(), results.payload_mut()],
            |user| user.is_following = true,
            || fetch_value(gateway, &prepared),
        )
    }

    pub fn unfollow(
        &mut self,
        session: &SessionIdentity,
        suggestions: &mut ListViewState<UserSummary>,
        results: &mut ListViewState<UserSummary>,
        followee_id: i64,
    ) -> Result<(), MutationError> {
        let gateway = &self.gateway;
        let prepared = endpoints::unfollow(session, followee_id);
        self.mutations.apply(
            followee_id,
            MutationKind::Unfollow,
            &mut [suggestions.payload_mut(), results.payload_mut()],
            |user| user.is_following = false,
            || fetch_value(gateway, &prepared),
        )
    }
}

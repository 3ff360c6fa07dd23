//! Feed screen use-case: recent reads from followed users.

use crate::gateway::{endpoints, Gateway};
use crate::model::social::FeedEntry;
use crate::session::SessionIdentity;
use crate::viewstate::ListViewState;

use super::fetch_list;

const LOGIN_MESSAGE: &str = "Please log in to view your feed";

pub struct FeedService<G> {
    gateway: G,
}

impl<G: Gateway> FeedService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn refresh(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<FeedEntry>,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = endpoints::feed(session);
        let token = state.begin_fetch();
        let result = fetch_list(&self.gateway, &prepared);
        state.apply_result(token, result);
    }
}

//! History screen use-cases: the has-read list, its local sort orders and
//! review editing.

use crate::gateway::{endpoints, Gateway};
use crate::model::book::HasReadBook;
use crate::mutation::{MutationController, MutationError, MutationKind};
use crate::session::SessionIdentity;
use crate::transform::{filter_and_sort, Criteria, SortDirection};
use crate::viewstate::ListViewState;

use super::{fetch_list, fetch_value};

const LOGIN_MESSAGE: &str = "Please log in to view your reading history";

/// Columns the history list can be ordered by locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySortField {
    Date,
    Title,
    Pages,
}

impl HistorySortField {
    fn field_name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Pages => "page_length",
        }
    }
}

pub struct HistoryService<G> {
    gateway: G,
    mutations: MutationController,
}

impl<G: Gateway> HistoryService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            mutations: MutationController::new(),
        }
    }

    pub fn refresh(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<HasReadBook>,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = endpoints::has_read(session);
        let token = state.begin_fetch();
        let result = fetch_list(&self.gateway, &prepared);
        state.apply_result(token, result);
    }

    /// Pure projection of the fetched list in the requested order; the
    /// source items are left untouched.
    pub fn sorted_view(
        &self,
        state: &ListViewState<HasReadBook>,
        field: HistorySortField,
        direction: SortDirection,
    ) -> Vec<HasReadBook> {
        let criteria = Criteria::new().sort_by(field.field_name(), direction);
        filter_and_sort(state.items(), &criteria)
    }

    /// Edits a review optimistically; the old text is restored if the
    /// backend rejects the update.
    pub fn save_review(
        &mut self,
        session: &SessionIdentity,
        state: &mut ListViewState<HasReadBook>,
        book_id: i64,
        review: &str,
    ) -> Result<(), MutationError> {
        let gateway = &self.gateway;
        let prepared = endpoints::update_review(session, book_id, review);
        let next = review.to_string();
        self.mutations.apply(
            book_id,
            MutationKind::EditReview,
            &mut [state.payload_mut()],
            |book| book.review = Some(next.clone()),
            || fetch_value(gateway, &prepared),
        )
    }
}

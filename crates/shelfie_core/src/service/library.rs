//! Library screen use-cases: the user's book list with its filter and
//! search variants, plus the optimistic writes on individual books.

use crate::gateway::{endpoints, FetchError, Gateway, GatewayResult, PreparedRequest};
use crate::model::book::{Book, NewBook};
use crate::mutation::{MutationController, MutationError, MutationKind};
use crate::session::SessionIdentity;
use crate::transform::SortDirection;
use crate::viewstate::ListViewState;

use super::{fetch_list, fetch_value};

const LOGIN_MESSAGE: &str = "Please log in to view your library";

/// Placeholder id for a book appended before the backend confirms it.
const DRAFT_BOOK_ID: i64 = -1;

pub struct LibraryService<G> {
    gateway: G,
    mutations: MutationController,
}

impl<G: Gateway> LibraryService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            mutations: MutationController::new(),
        }
    }

    pub fn refresh_all(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
    ) {
        self.refresh_books(session, state, endpoints::all_books);
    }

    pub fn refresh_by_letter(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
        letter: char,
    ) {
        self.refresh_books(session, state, |s| endpoints::books_by_letter(s, letter));
    }

    pub fn search(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
        query: &str,
    ) {
        self.refresh_books(session, state, |s| endpoints::search_books(s, query));
    }

    pub fn refresh_sorted(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
        query: &str,
        direction: SortDirection,
    ) {
        self.refresh_books(session, state, |s| endpoints::sort_books(s, query, direction));
    }

    pub fn refresh_page_range(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
        min: i64,
        max: i64,
    ) {
        self.refresh_books(session, state, |s| {
            endpoints::books_in_page_range(s, min, max)
        });
    }

    /// Appends the book locally, then confirms it with the backend. On
    /// failure the draft row is removed again and the error returned.
    pub fn add_book(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
        new_book: &NewBook,
    ) -> GatewayResult<()> {
        let Some(session) = session else {
            return Err(FetchError::AuthRequired);
        };
        state.payload_mut().push(draft_book(new_book));
        match fetch_value(&self.gateway, &endpoints::add_book(session, new_book)) {
            Ok(_) => Ok(()),
            Err(err) => {
                state
                    .payload_mut()
                    .retain(|book| book.id != DRAFT_BOOK_ID);
                Err(err)
            }
        }
    }

    /// Records the book as read with an optional review. The list itself
    /// carries no read flag, so the patch is empty; the controller still
    /// rejects a second submit while one is in flight.
    pub fn mark_as_read(
        &mut self,
        session: &SessionIdentity,
        state: &mut ListViewState<Book>,
        book_id: i64,
        review: &str,
    ) -> Result<(), MutationError> {
        let gateway = &self.gateway;
        let prepared = endpoints::mark_as_read(session, book_id, review);
        self.mutations.apply(
            book_id,
            MutationKind::MarkAsRead,
            &mut [state.payload_mut()],
            |_| {},
            || fetch_value(gateway, &prepared),
        )
    }

    /// Toggles the star flag optimistically and rolls back on failure.
    pub fn set_starred(
        &mut self,
        state: &mut ListViewState<Book>,
        book_id: i64,
        starred: bool,
    ) -> Result<(), MutationError> {
        let gateway = &self.gateway;
        let (kind, prepared) = if starred {
            (MutationKind::Star, endpoints::star(book_id))
        } else {
            (MutationKind::Unstar, endpoints::unstar(book_id))
        };
        self.mutations.apply(
            book_id,
            kind,
            &mut [state.payload_mut()],
            |book| book.starred = Some(starred),
            || fetch_value(gateway, &prepared),
        )
    }

    fn refresh_books(
        &self,
        session: Option<&SessionIdentity>,
        state: &mut ListViewState<Book>,
        build: impl FnOnce(&SessionIdentity) -> PreparedRequest,
    ) {
        let Some(session) = state.require_session(session, LOGIN_MESSAGE) else {
            return;
        };
        let prepared = build(session);
        let token = state.begin_fetch();
        let result = fetch_list(&self.gateway, &prepared);
        state.apply_result(token, result);
    }
}

fn draft_book(new_book: &NewBook) -> Book {
    Book {
        id: DRAFT_BOOK_ID,
        title: new_book.title.clone(),
        author: new_book.author.clone(),
        cover_url: new_book.cover_url.clone(),
        letter: Book::letter_of(&new_book.title),
        starred: None,
        issue: new_book.issue.clone(),
        page_length: new_book.page_length,
    }
}

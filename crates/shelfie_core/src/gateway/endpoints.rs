//! Request builders for every backend route.
//!
//! # Responsibility
//! - Thread the session identity into each request exactly the way the
//!   backend expects it (`user_id` vs `username`, query vs body).
//! - Declare the response envelope each route actually uses.
//!
//! # Invariants
//! - Several routes take the numeric user id under a `username` parameter;
//!   that is the backend's contract, not a mix-up here.

use serde_json::json;

use super::{ApiRequest, Envelope, PreparedRequest};
use crate::model::book::NewBook;
use crate::session::SessionIdentity;
use crate::transform::SortDirection;

fn prepared(request: ApiRequest, envelope: Envelope) -> PreparedRequest {
    PreparedRequest { request, envelope }
}

fn status_wrapped(request: ApiRequest, payload_key: &'static str) -> PreparedRequest {
    prepared(request, Envelope::StatusWrapped { payload_key })
}

pub fn login(username: &str, password: &str) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/login").with_body(json!({
            "username": username,
            "password": password,
        })),
        Envelope::Bare,
    )
}

pub fn register(name: &str, age: i64, username: &str, password: &str) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/register").with_body(json!({
            "name": name,
            "age": age,
            "username": username,
            "password": password,
        })),
        Envelope::Bare,
    )
}

pub fn hello() -> PreparedRequest {
    prepared(ApiRequest::get("/api/hello"), Envelope::Bare)
}

pub fn all_books(session: &SessionIdentity) -> PreparedRequest {
    status_wrapped(
        ApiRequest::post("/api/get_all_books_by_user")
            .with_body(json!({"username": session.username()})),
        "books",
    )
}

pub fn books_by_letter(session: &SessionIdentity, letter: char) -> PreparedRequest {
    status_wrapped(
        ApiRequest::post("/api/filter_books_by_letter").with_body(json!({
            "letter": letter.to_string(),
            "username": session.username(),
        })),
        "books",
    )
}

pub fn add_book(session: &SessionIdentity, book: &NewBook) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/books").with_body(json!({
            "title": book.title,
            "issue": book.issue,
            "page_length": book.page_length,
            "author": book.author,
            "author_dob": book.author_dob,
            "cover_url": book.cover_url,
            "publisher": book.publisher,
            "user_id": session.user_id(),
        })),
        Envelope::Acknowledged,
    )
}

pub fn search_books(session: &SessionIdentity, query: &str) -> PreparedRequest {
    status_wrapped(
        ApiRequest::get("/api/books/search")
            .with_query("query", query)
            .with_query("username", session.user_id().to_string()),
        "books",
    )
}

pub fn sort_books(
    session: &SessionIdentity,
    query: &str,
    direction: SortDirection,
) -> PreparedRequest {
    let sort = match direction {
        SortDirection::Ascending => "asc",
        SortDirection::Descending => "desc",
    };
    status_wrapped(
        ApiRequest::get("/api/books/sort")
            .with_query("query", query)
            .with_query("sort", sort)
            .with_query("username", session.user_id().to_string()),
        "books",
    )
}

pub fn books_in_page_range(session: &SessionIdentity, min: i64, max: i64) -> PreparedRequest {
    status_wrapped(
        ApiRequest::get("/api/books/page-range")
            .with_query("min", min.to_string())
            .with_query("max", max.to_string())
            .with_query("username", session.user_id().to_string()),
        "books",
    )
}

pub fn mark_as_read(session: &SessionIdentity, book_id: i64, review: &str) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/mark-as-read")
            .with_query("username", session.user_id().to_string())
            .with_body(json!({
                "book_id": book_id,
                "review": review,
            })),
        Envelope::Acknowledged,
    )
}

pub fn star(book_id: i64) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/star").with_body(json!({
            "book_id": book_id,
            "starred": true,
        })),
        Envelope::Acknowledged,
    )
}

pub fn unstar(book_id: i64) -> PreparedRequest {
    prepared(
        ApiRequest::delete("/api/unstar").with_body(json!({"book_id": book_id})),
        Envelope::Acknowledged,
    )
}

pub fn feed(session: &SessionIdentity) -> PreparedRequest {
    status_wrapped(
        ApiRequest::get("/api/feed").with_query("user_id", session.user_id().to_string()),
        "feed",
    )
}

pub fn users_to_follow(session: &SessionIdentity) -> PreparedRequest {
    status_wrapped(
        ApiRequest::get("/api/users-to-follow")
            .with_query("user_id", session.user_id().to_string()),
        "users",
    )
}

pub fn search_users(session: &SessionIdentity, query: &str) -> PreparedRequest {
    status_wrapped(
        ApiRequest::get("/api/search-users")
            .with_query("query", query)
            .with_query("current_user_id", session.user_id().to_string()),
        "users",
    )
}

pub fn follow(session: &SessionIdentity, followee_id: i64) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/follow").with_body(json!({
            "follower_id": session.user_id(),
            "followee_id": followee_id,
        })),
        Envelope::Acknowledged,
    )
}

pub fn unfollow(session: &SessionIdentity, followee_id: i64) -> PreparedRequest {
    prepared(
        ApiRequest::post("/api/unfollow").with_body(json!({
            "follower_id": session.user_id(),
            "followee_id": followee_id,
        })),
        Envelope::Acknowledged,
    )
}

pub fn has_read(session: &SessionIdentity) -> PreparedRequest {
    prepared(
        ApiRequest::get("/api/hasread").with_query("username", session.user_id().to_string()),
        Envelope::Bare,
    )
}

pub fn update_review(session: &SessionIdentity, book_id: i64, review: &str) -> PreparedRequest {
    prepared(
        ApiRequest::put("/api/hasread/review").with_body(json!({
            "user_id": session.user_id(),
            "book_id": book_id,
            "review": review,
        })),
        Envelope::Acknowledged,
    )
}

pub fn author_stats(session: &SessionIdentity) -> PreparedRequest {
    prepared(
        ApiRequest::get("/api/author-stats")
            .with_query("username", session.user_id().to_string()),
        Envelope::Bare,
    )
}

pub fn most_read_book(year: i32) -> PreparedRequest {
    prepared(
        ApiRequest::get("/api/most-read-book").with_query("year", year.to_string()),
        Envelope::Bare,
    )
}

pub fn available_years() -> PreparedRequest {
    prepared(
        ApiRequest::get("/api/most-read-book/available-years"),
        Envelope::Bare,
    )
}

pub fn reading_stats(session: &SessionIdentity) -> PreparedRequest {
    prepared(
        ApiRequest::get("/api/reading-stats")
            .with_query("user_id", session.user_id().to_string()),
        Envelope::Bare,
    )
}

pub fn reading_challenges(session: &SessionIdentity) -> PreparedRequest {
    status_wrapped(
        ApiRequest::get("/api/reading_challenges")
            .with_query("user_id", session.user_id().to_string()),
        "challenges",
    )
}

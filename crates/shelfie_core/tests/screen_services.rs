//! End-to-end screen flows against a scripted backend.

mod common;

use common::ScriptedGateway;
use serde_json::json;
use shelfie_core::{
    AuthService, FetchError, InsightsService, LibraryService, ListViewState, Method, NewBook,
    SessionIdentity, SocialService, ViewState, ViewStatus,
};

fn session() -> SessionIdentity {
    SessionIdentity::new(9, "nadia")
}

#[test]
fn login_builds_a_session_from_the_user_id() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"user_id": 9}));
    let service = AuthService::new(&gateway);

    let identity = service.login("nadia", "hunter2").unwrap();
    assert_eq!(identity.user_id(), 9);
    assert_eq!(identity.username(), "nadia");

    let call = &gateway.calls()[0];
    assert_eq!(call.path, "/api/login");
    assert_eq!(call.method, Method::Post);
}

#[test]
fn login_with_a_string_user_id_still_works() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"user_id": "42"}));
    let identity = AuthService::new(&gateway).login("sam", "pw").unwrap();
    assert_eq!(identity.user_id(), 42);
}

#[test]
fn login_without_a_user_id_reads_as_application_failure() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"error": "Invalid credentials"}));
    let err = AuthService::new(&gateway).login("sam", "wrong").unwrap_err();
    assert_eq!(
        err,
        FetchError::Application {
            message: "Invalid credentials".to_string()
        }
    );
}

#[test]
fn library_refresh_sends_the_username_string() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "status": "success",
        "books": [{
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "coverUrl": null,
            "letter": "D",
            "issue": null,
            "page_length": 412
        }]
    }));
    let service = LibraryService::new(&gateway);
    let mut state = ListViewState::new();

    service.refresh_all(Some(&session()), &mut state);

    assert_eq!(state.status(), ViewStatus::Ready);
    assert_eq!(state.items()[0].title, "Dune");
    let call = &gateway.calls()[0];
    assert_eq!(call.path, "/api/get_all_books_by_user");
    assert_eq!(call.body.as_ref().unwrap()["username"], json!("nadia"));
}

#[test]
fn empty_book_payload_reads_as_an_empty_shelf() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"status": "success"}));
    let service = LibraryService::new(&gateway);
    let mut state = ListViewState::new();

    service.refresh_all(Some(&session()), &mut state);

    assert_eq!(state.status(), ViewStatus::Ready);
    assert!(state.items().is_empty());
}

#[test]
fn rejected_add_book_removes_the_draft_row() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "status": "success",
        "books": [{"id": 1, "title": "Dune", "author": "Herbert"}]
    }));
    let service = LibraryService::new(&gateway);
    let mut state = ListViewState::new();
    let identity = session();
    service.refresh_all(Some(&identity), &mut state);

    gateway.push_err(FetchError::Application {
        message: "book already exists".to_string(),
    });
    let new_book = NewBook {
        title: "Dune Messiah".to_string(),
        author: "Herbert".to_string(),
        publisher: "Chilton".to_string(),
        ..NewBook::default()
    };

    let err = service.add_book(Some(&identity), &mut state, &new_book);
    assert!(err.is_err());
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].title, "Dune");
}

#[test]
fn accepted_add_book_keeps_the_appended_row() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"status": "success", "books": []}));
    let service = LibraryService::new(&gateway);
    let mut state = ListViewState::new();
    let identity = session();
    service.refresh_all(Some(&identity), &mut state);

    gateway.push_ok(json!({"status": "success", "message": "Book added"}));
    let new_book = NewBook {
        title: "Dune Messiah".to_string(),
        author: "Herbert".to_string(),
        publisher: "Chilton".to_string(),
        ..NewBook::default()
    };

    service.add_book(Some(&identity), &mut state, &new_book).unwrap();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].letter, "D");
}

#[test]
fn empty_user_search_resolves_locally() {
    let gateway = ScriptedGateway::new();
    let service = SocialService::new(&gateway);
    let mut state = ListViewState::new();

    service.search_users(Some(&session()), &mut state, "   ");

    assert_eq!(state.status(), ViewStatus::Ready);
    assert!(state.items().is_empty());
    assert_eq!(gateway.call_count(), 0);
}

#[test]
fn challenges_decode_with_progress_percentages() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "status": "success",
        "challenges": {
            "read_12_books_this_year": {"completed": false, "progress": 3},
            "read_3_books_by_same_author": {"completed": true, "progress": 3},
            "read_5000_pages": {"completed": false, "progress": 1280}
        }
    }));
    let service = InsightsService::new(&gateway);
    let mut state = ViewState::new();

    service.refresh_challenges(Some(&session()), &mut state);

    assert_eq!(state.status(), ViewStatus::Ready);
    let set = state.payload().as_ref().unwrap();
    let entries = set.entries();
    assert_eq!(entries[0].challenge.percent_of(entries[0].target), 25.0);
    assert_eq!(entries[1].challenge.percent_of(entries[1].target), 100.0);
}

#[test]
fn author_stats_survive_decimal_strings() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!([{
        "author_name": "Le Guin",
        "num_books": 4,
        "avg_page_length": "287.5",
        "min_book_title": "The Word for World Is Forest",
        "min_page_length": "128",
        "max_book_title": "Always Coming Home",
        "max_page_length": 525
    }]));
    let service = InsightsService::new(&gateway);
    let mut state = ListViewState::new();

    service.refresh_author_stats(Some(&session()), &mut state);

    assert_eq!(state.status(), ViewStatus::Ready);
    assert_eq!(state.items()[0].avg_page_length, Some(287.5));
    assert_eq!(state.items()[0].max_page_length, Some(525.0));
}

#[test]
fn available_years_falls_back_to_an_empty_list_when_missing() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"years": [2024, 2023]}));
    let service = InsightsService::new(&gateway);
    assert_eq!(service.available_years().unwrap(), vec![2024, 2023]);

    gateway.push_ok(json!({}));
    assert!(service.available_years().unwrap().is_empty());
}

#[test]
fn reading_stats_reach_the_view_state() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "total_books": 18,
        "avg_pages": 301.4,
        "favorite_author": "Ursula K. Le Guin",
        "first_book": "A Wizard of Earthsea",
        "latest_book": "The Telling"
    }));
    let service = InsightsService::new(&gateway);
    let mut state = ViewState::new();

    service.refresh_reading_stats(Some(&session()), &mut state);

    assert_eq!(state.status(), ViewStatus::Ready);
    let stats = state.payload().as_ref().unwrap();
    assert_eq!(stats.total_books, 18);
    assert_eq!(stats.avg_pages, Some(301.4));
}

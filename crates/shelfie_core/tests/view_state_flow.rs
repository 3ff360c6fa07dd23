//! Fetch sequencing across screens: loading transitions, stale-response
//! discard and the auth short-circuit.

mod common;

use common::ScriptedGateway;
use serde_json::json;
use shelfie_core::{
    ApplyOutcome, FeedService, FetchError, InsightsService, ListViewState, SessionIdentity,
    ViewState, ViewStatus, YearRanking,
};

fn session() -> SessionIdentity {
    SessionIdentity::new(3, "carol")
}

#[test]
fn feed_refresh_reaches_ready() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "status": "success",
        "feed": [{
            "hasread_id": 11,
            "user_id": 5,
            "username": "eve",
            "name": "Eve",
            "book_id": 2,
            "book_title": "Piranesi",
            "cover_url": null,
            "date": "2024-03-01",
            "review": "loved it",
            "page_length": 272
        }]
    }));
    let service = FeedService::new(&gateway);
    let mut state = ListViewState::new();

    service.refresh(Some(&session()), &mut state);

    assert_eq!(state.status(), ViewStatus::Ready);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].book_title, "Piranesi");
}

#[test]
fn feed_failure_clears_items_and_keeps_retry_possible() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "status": "success",
        "feed": [{
            "hasread_id": 11,
            "user_id": 5,
            "username": "eve",
            "name": "Eve",
            "book_id": 2,
            "book_title": "Piranesi",
            "cover_url": null,
            "date": "2024-03-01",
            "review": null,
            "page_length": null
        }]
    }));
    gateway.push_err(FetchError::Network("connection reset".to_string()));
    gateway.push_ok(json!({"status": "success", "feed": []}));
    let service = FeedService::new(&gateway);
    let mut state = ListViewState::new();
    let identity = session();

    service.refresh(Some(&identity), &mut state);
    assert_eq!(state.status(), ViewStatus::Ready);

    service.refresh(Some(&identity), &mut state);
    assert_eq!(state.status(), ViewStatus::Error);
    assert!(state.items().is_empty());
    assert_eq!(
        state.error_message(),
        Some("network failure: connection reset")
    );

    service.refresh(Some(&identity), &mut state);
    assert_eq!(state.status(), ViewStatus::Ready);
}

#[test]
fn missing_session_short_circuits_with_zero_network_calls() {
    let gateway = ScriptedGateway::new();
    let service = FeedService::new(&gateway);
    let mut state = ListViewState::new();

    service.refresh(None, &mut state);

    assert_eq!(state.status(), ViewStatus::Error);
    assert_eq!(state.error_message(), Some("Please log in to view your feed"));
    assert_eq!(gateway.call_count(), 0);
}

#[test]
fn stale_year_response_never_overwrites_the_newer_one() {
    let mut state: ViewState<Option<YearRanking>> = ViewState::new();
    let ranking = |year: i32, title: &str| YearRanking {
        book: Some(shelfie_core::MostReadBook {
            book_id: 1,
            title: title.to_string(),
            read_count: 9,
        }),
        year,
        message: None,
    };

    // Two refreshes fired back to back; the older response lands last.
    let token_2023 = state.begin_fetch();
    let token_2024 = state.begin_fetch();

    assert_eq!(
        state.apply_result(token_2024, Ok(Some(ranking(2024, "Babel")))),
        ApplyOutcome::Applied
    );
    assert_eq!(
        state.apply_result(token_2023, Ok(Some(ranking(2023, "Circe")))),
        ApplyOutcome::Stale
    );

    let shown = state.payload().as_ref().unwrap();
    assert_eq!(shown.year, 2024);
    assert_eq!(shown.book.as_ref().unwrap().title, "Babel");
}

#[test]
fn rankings_refresh_fills_in_the_requested_year() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "book": {"book_id": 7, "title": "Babel", "read_count": 12},
        "message": null
    }));
    let service = InsightsService::new(&gateway);
    let mut state: ViewState<Option<YearRanking>> = ViewState::new();

    service.refresh_most_read(&mut state, 2024);

    assert_eq!(state.status(), ViewStatus::Ready);
    let ranking = state.payload().as_ref().unwrap();
    assert_eq!(ranking.year, 2024);
    assert_eq!(ranking.book.as_ref().unwrap().read_count, 12);
}

//! Optimistic follow/unfollow and review editing through the services.

mod common;

use common::ScriptedGateway;
use serde_json::json;
use shelfie_core::mutation::MutationFailure;
use shelfie_core::{
    FetchError, HistoryService, ListViewState, SessionIdentity, SocialService, ViewStatus,
};

fn session() -> SessionIdentity {
    SessionIdentity::new(7, "grace")
}

fn user_payload(user_id: i64, username: &str) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "username": username,
        "name": username,
        "isFollowing": false
    })
}

fn loaded_users(gateway: &ScriptedGateway, users: serde_json::Value) -> ListViewState<shelfie_core::UserSummary> {
    gateway.push_ok(json!({"status": "success", "users": users}));
    let service = SocialService::new(gateway);
    let mut state = ListViewState::new();
    service.refresh_suggestions(Some(&session()), &mut state);
    assert_eq!(state.status(), ViewStatus::Ready);
    state
}

#[test]
fn follow_patches_suggestions_and_search_results_together() {
    let gateway = ScriptedGateway::new();
    let mut suggestions = loaded_users(
        &gateway,
        json!([user_payload(20, "henry"), user_payload(21, "iris")]),
    );
    let mut results = loaded_users(&gateway, json!([user_payload(21, "iris")]));

    gateway.push_ok(json!({"status": "success", "message": "followed"}));
    let mut service = SocialService::new(&gateway);

    service
        .follow(&session(), &mut suggestions, &mut results, 21)
        .unwrap();

    assert!(!suggestions.items()[0].is_following);
    assert!(suggestions.items()[1].is_following);
    assert!(results.items()[0].is_following);

    let follow_call = gateway.calls().last().cloned().unwrap();
    assert_eq!(follow_call.path, "/api/follow");
    let body = follow_call.body.unwrap();
    assert_eq!(body["follower_id"], json!(7));
    assert_eq!(body["followee_id"], json!(21));
}

#[test]
fn failed_follow_rolls_back_every_list_and_surfaces_the_error() {
    let gateway = ScriptedGateway::new();
    let mut suggestions = loaded_users(&gateway, json!([user_payload(20, "henry")]));
    let mut results = loaded_users(&gateway, json!([user_payload(20, "henry")]));

    gateway.push_err(FetchError::Application {
        message: "already following".to_string(),
    });
    let mut service = SocialService::new(&gateway);

    let err = service
        .follow(&session(), &mut suggestions, &mut results, 20)
        .unwrap_err();

    assert_eq!(err.item_id, 20);
    assert!(matches!(err.reason, MutationFailure::Fetch(_)));
    assert!(!suggestions.items()[0].is_following);
    assert!(!results.items()[0].is_following);
    // The rendered lists survive the failure.
    assert_eq!(suggestions.status(), ViewStatus::Ready);
    assert_eq!(results.status(), ViewStatus::Ready);
}

#[test]
fn unfollow_clears_the_flag_optimistically() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "status": "success",
        "users": [{
            "user_id": 20,
            "username": "henry",
            "name": "Henry",
            "isFollowing": true
        }]
    }));
    let mut state = ListViewState::new();
    SocialService::new(&gateway).refresh_suggestions(Some(&session()), &mut state);

    gateway.push_ok(json!({"status": "success", "message": "unfollowed"}));
    let mut service = SocialService::new(&gateway);
    let mut empty_results = ListViewState::new();

    service
        .unfollow(&session(), &mut state, &mut empty_results, 20)
        .unwrap();

    assert!(!state.items()[0].is_following);
}

#[test]
fn review_edit_restores_the_old_text_on_failure() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!([{
        "book_id": 4,
        "title": "The Dispossessed",
        "issue": null,
        "page_length": 387,
        "review": "old words",
        "date": "2024-02-10",
        "hasread_id": 91
    }]));
    let mut state = ListViewState::new();
    let mut service = HistoryService::new(&gateway);
    service.refresh(Some(&session()), &mut state);
    assert_eq!(state.status(), ViewStatus::Ready);

    gateway.push_ok(json!({"status": "success", "message": "updated"}));
    service
        .save_review(&session(), &mut state, 4, "new words")
        .unwrap();
    assert_eq!(state.items()[0].review.as_deref(), Some("new words"));

    gateway.push_err(FetchError::Network("timeout".to_string()));
    let err = service
        .save_review(&session(), &mut state, 4, "never saved")
        .unwrap_err();
    assert!(matches!(err.reason, MutationFailure::Fetch(_)));
    assert_eq!(state.items()[0].review.as_deref(), Some("new words"));
}

//! Integration tests for the anonymous viewer surface
mod common;

use crate::common::{
    create_test_app_state, full_profile_body, get_info_request, save_request, unique_owner_key,
};

use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pk_server::routes::build_router;

#[tokio::test]
async fn test_info_for_unknown_key_returns_404() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(get_info_request(&unique_owner_key()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_info_for_malformed_key_returns_400() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    // '!' is outside the owner-key charset; rejected before any store read
    let response = app.oneshot(get_info_request("bad!key")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_info_shows_visible_nonempty_fields_and_last_updated() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    app.clone()
        .oneshot(save_request(&owner, &full_profile_body()))
        .await
        .unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["info"]["vehicleNumber"], "12가3456");
    assert_eq!(json["info"]["comment"], "Back in 10 minutes");
    assert!(json["info"]["lastUpdated"].is_i64());
}

#[tokio::test]
async fn test_info_omits_hidden_field_and_its_contact_action() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    let body = serde_json::json!({
        "fields": {
            "vehicleNumber": "12가3456",
            "phoneNumber": "010-1234-5678"
        },
        "visibility": {"vehicleNumber": true, "phoneNumber": false}
    });
    app.clone().oneshot(save_request(&owner, &body)).await.unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let info = json["info"].as_object().unwrap();

    assert_eq!(info["vehicleNumber"], "12가3456");
    // Hidden field and its derived call action are absent, not null
    assert!(!info.contains_key("phoneNumber"));
    assert!(!info.contains_key("phoneCallUri"));
}

#[tokio::test]
async fn test_info_omits_empty_fields_even_when_visible() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    let body = serde_json::json!({
        "fields": {"comment": "hi", "memo": "   "},
        "visibility": {}
    });
    app.clone().oneshot(save_request(&owner, &body)).await.unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let info = json["info"].as_object().unwrap();

    assert_eq!(info["comment"], "hi");
    // Unset and whitespace-only fields never render
    assert!(!info.contains_key("nickname"));
    assert!(!info.contains_key("memo"));
}

#[tokio::test]
async fn test_info_includes_phone_call_action_when_phone_visible() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    app.clone()
        .oneshot(save_request(&owner, &full_profile_body()))
        .await
        .unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["info"]["phoneCallUri"], "tel:010-1234-5678");
}

#[tokio::test]
async fn test_info_contact_actions_are_gated_independently() {
    // Hidden phone leaves the chat action untouched
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    let body = serde_json::json!({
        "fields": {
            "phoneNumber": "010-1234-5678",
            "kakaoOpenChatUrl": "https://open.kakao.com/o/abc123"
        },
        "visibility": {"phoneNumber": false}
    });
    app.clone().oneshot(save_request(&owner, &body)).await.unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let info = json["info"].as_object().unwrap();

    assert!(!info.contains_key("phoneCallUri"));
    assert_eq!(info["kakaoOpenChatUrl"], "https://open.kakao.com/o/abc123");
}

#[tokio::test]
async fn test_info_never_exposes_visibility_flags() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    app.clone()
        .oneshot(save_request(&owner, &full_profile_body()))
        .await
        .unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert!(!json["info"].as_object().unwrap().contains_key("visibility"));
    assert!(!json.as_object().unwrap().contains_key("visibility"));
}

#[tokio::test]
async fn test_info_with_default_visibility_shows_saved_comment() {
    // Saving with an empty visibility map defaults every flag to visible
    let state = create_test_app_state().await;
    let app = build_router(state);
    let owner = unique_owner_key();

    let body = serde_json::json!({"fields": {"comment": "hi"}, "visibility": {}});
    app.clone().oneshot(save_request(&owner, &body)).await.unwrap();

    let response = app.oneshot(get_info_request(&owner)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["info"]["comment"], "hi");
    assert!(json["info"]["lastUpdated"].is_i64());
}

use crate::ApiError;

use pk_core::OwnerKey;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Parking info not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Parking info not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "key must not be empty".into(),
        field: Some("ownerKey".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "ownerKey");
}

#[tokio::test]
async fn test_store_unavailable_returns_503() {
    let error = ApiError::StoreUnavailable {
        message: "Profile store unavailable, retry shortly".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Stored profile could not be decoded".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_key_converts_to_validation() {
    let core_err = OwnerKey::parse("").unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("ownerKey"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_io_failure_converts_to_store_unavailable() {
    let db_err = pk_db::DbError::from(sqlx::Error::PoolTimedOut);
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::StoreUnavailable { .. } => {}
        _ => panic!("Expected StoreUnavailable error"),
    }
}

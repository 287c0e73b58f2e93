use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;

use super::harness::{TestHarness, body_text, decode_json, get_request, header_value, json_request};

#[tokio::test]
async fn web_user_registration_logs_the_account_in() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/users/register",
            json!({
                "email": "sara@example.com",
                "password": "hunter2",
                "phone": "0300-1234567"
            }),
        ))
        .await
        .expect("register response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload: serde_json::Value = decode_json(response).await;
    assert_eq!(payload["user"]["email"], "sara@example.com");
    assert!(payload["user"].get("password").is_none());

    let me = harness
        .router
        .clone()
        .oneshot(get_request("/api/users/me"))
        .await
        .expect("session response");
    assert_eq!(me.status(), StatusCode::OK);
    let session: serde_json::Value = decode_json(me).await;
    assert_eq!(session["user"]["email"], "sara@example.com");
}

#[tokio::test]
async fn web_duplicate_user_registration_conflicts() {
    let harness = TestHarness::setup();
    let body = json!({
        "email": "sara@example.com",
        "password": "hunter2",
        "phone": "0300-1234567"
    });
    let first = harness
        .router
        .clone()
        .oneshot(json_request("/api/users/register", body.clone()))
        .await
        .expect("register response");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = harness
        .router
        .clone()
        .oneshot(json_request("/api/users/register", body))
        .await
        .expect("register response");
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let payload: serde_json::Value = decode_json(second).await;
    assert_eq!(payload["code"], "DUPLICATE_KEY");
}

#[tokio::test]
async fn web_user_login_is_exact_match_only() {
    let harness = TestHarness::setup();
    harness
        .state
        .app
        .register_user(darulifta_core::UserAccount {
            email: "sara@example.com".to_string(),
            password: "hunter2".to_string(),
            phone: "0300-1234567".to_string(),
        })
        .expect("register");
    harness.state.app.logout_user().expect("logout");

    let wrong = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/users/login",
            json!({"email": "sara@example.com", "password": "Hunter2"}),
        ))
        .await
        .expect("login response");
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let payload: serde_json::Value = decode_json(wrong).await;
    assert_eq!(payload["code"], "CREDENTIAL_MISMATCH");

    let right = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/users/login",
            json!({"email": "sara@example.com", "password": "hunter2"}),
        ))
        .await
        .expect("login response");
    assert_eq!(right.status(), StatusCode::OK);
}

#[tokio::test]
async fn web_user_logout_clears_the_session() {
    let harness = TestHarness::setup();
    harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/users/register",
            json!({
                "email": "sara@example.com",
                "password": "hunter2",
                "phone": "0300-1234567"
            }),
        ))
        .await
        .expect("register response");

    let logout = harness
        .router
        .clone()
        .oneshot(json_request("/api/users/logout", json!({})))
        .await
        .expect("logout response");
    assert_eq!(logout.status(), StatusCode::OK);

    let me = harness
        .router
        .clone()
        .oneshot(get_request("/api/users/me"))
        .await
        .expect("session response");
    let session: serde_json::Value = decode_json(me).await;
    assert!(session["user"].is_null());
}

#[tokio::test]
async fn web_profile_transcript_needs_a_session() {
    let harness = TestHarness::setup();
    let denied = harness
        .router
        .clone()
        .oneshot(get_request("/api/users/me/transcript"))
        .await
        .expect("transcript response");
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/users/register",
            json!({
                "email": "sara@example.com",
                "password": "hunter2",
                "phone": "0300/1234567"
            }),
        ))
        .await
        .expect("register response");

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/api/users/me/transcript"))
        .await
        .expect("transcript response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(response.headers(), "content-disposition"),
        Some("attachment; filename=\"user-profile-0300-1234567.txt\"")
    );
    let body = body_text(response).await;
    assert!(body.contains("Email: sara@example.com"));
    assert!(body.contains("Status: Verified"));
}

#[tokio::test]
async fn web_mufti_session_round_trip() {
    let harness = TestHarness::setup();
    let anonymous = harness
        .router
        .clone()
        .oneshot(get_request("/api/muftis/me"))
        .await
        .expect("session response");
    let session: serde_json::Value = decode_json(anonymous).await;
    assert!(session["mufti"].is_null());

    let login = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/muftis/login",
            json!({"username": "Abdullahshah", "password": "ad123min1"}),
        ))
        .await
        .expect("login response");
    assert_eq!(login.status(), StatusCode::OK);
    let payload: serde_json::Value = decode_json(login).await;
    assert_eq!(payload["mufti"]["name"], "Mufti Abdullah Shah");
    assert!(payload["mufti"].get("password").is_none());

    let logout = harness
        .router
        .clone()
        .oneshot(json_request("/api/muftis/logout", json!({})))
        .await
        .expect("logout response");
    assert_eq!(logout.status(), StatusCode::OK);

    let after = harness
        .router
        .clone()
        .oneshot(get_request("/api/muftis/me"))
        .await
        .expect("session response");
    let session: serde_json::Value = decode_json(after).await;
    assert!(session["mufti"].is_null());
}

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use gasmon_api::models::LoginRequest;
use tower::ServiceExt;

mod common;
use common::mock_app::{MockApp, TEST_PASSWORD};

fn login_request(user_name: &str, password: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/auth/login")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&LoginRequest {
                user_name: user_name.to_string(),
                password: password.to_string(),
            })
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_login() {
    let app = MockApp::new().await;
    app.create_test_user("operator").await;

    let response = app
        .router
        .clone()
        .oneshot(login_request("operator", TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let token = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let token = String::from_utf8(token.to_vec()).unwrap();
    let claims = app.token_service.retrieve_token_claims(&token).unwrap().claims;
    assert_eq!(claims.sub, "operator");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = MockApp::new().await;
    app.create_test_user("operator").await;

    let response = app
        .router
        .clone()
        .oneshot(login_request("operator", "wrong_password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // unknown users look exactly like wrong passwords
    let response = app
        .router
        .clone()
        .oneshot(login_request("nobody", TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/auth/logout")
        .method(Method::POST)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logout_expires_existing_session_cookie() {
    let app = MockApp::new().await;
    let user = app.create_test_user("operator").await;
    let token = app.token_for(&user);

    let request = Request::builder()
        .uri("/api/auth/logout")
        .method(Method::POST)
        .header(header::COOKIE, format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(!cookie.contains(&token));
}

#[tokio::test]
async fn test_current_user() {
    let app = MockApp::new().await;
    let user = app.create_test_user("operator").await;
    let token = app.token_for(&user);

    let (status, body) = app.get_json("/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_name"], "operator");

    let (status, _) = app.get_json(&format!("/api/auth/me?token={token}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::COOKIE, format!("session={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let app = MockApp::new().await;

    let (status, body) = app.get_json("/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Missing token");

    let (status, body) = app.get_json("/api/auth/me", Some("invalid_token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token");
}

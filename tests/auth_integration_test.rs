use estate_admin_client::{
    AdminClient, ClientConfig, CookieCredentials, CredentialStore, LoginRequest,
    MemoryCredentials, ResetPasswordRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a test client around the given credential store
fn create_test_client(server: &MockServer, credentials: impl CredentialStore + 'static) -> AdminClient {
    let config = ClientConfig::new(format!("{}/api", server.uri())).expect("Invalid base URL");
    AdminClient::new(config, credentials).expect("Failed to create client")
}

/// Test login is sent without a bearer credential
#[tokio::test]
async fn test_login_is_unauthenticated() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let credentials = MemoryCredentials::with_token("stale-token");
    let client = create_test_client(&server, credentials);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ops@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "token": "fresh-token",
                "admin": {"_id": "adm1", "email": "ops@example.com", "role": "superadmin"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = LoginRequest {
        email: "ops@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let response = client.auth().login(&request).await;

    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Login successful"));
    let session = response.data.expect("Session should be present");
    assert_eq!(session.token.as_deref(), Some("fresh-token"));
    assert_eq!(
        session.admin.and_then(|admin| admin.role).as_deref(),
        Some("superadmin")
    );

    let requests = server.received_requests().await.expect("Request recording disabled");
    assert!(
        requests[0].headers.get("authorization").is_none(),
        "Login must not carry a bearer token"
    );
}

/// Test password reset flows skip the credential too
#[tokio::test]
async fn test_password_reset_flow_is_unauthenticated() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let client = create_test_client(&server, MemoryCredentials::with_token("t"));

    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .and(body_json(json!({"email": "ops@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Email sent"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password"))
        .and(body_json(json!({"token": "reset-1", "password": "n3w"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let forgot = client.auth().forgot_password("ops@example.com").await;
    assert!(forgot.success);
    assert_eq!(forgot.message.as_deref(), Some("Email sent"));

    let reset = client
        .auth()
        .reset_password(&ResetPasswordRequest {
            token: "reset-1".to_string(),
            password: "n3w".to_string(),
        })
        .await;
    assert!(reset.success);

    let requests = server.received_requests().await.expect("Request recording disabled");
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.headers.get("authorization").is_none()));
}

/// Test 401 clears a memory credential
#[tokio::test]
async fn test_unauthorized_clears_credential() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let credentials = MemoryCredentials::with_token("expired-token");
    let client = create_test_client(&server, credentials.clone());

    Mock::given(method("GET"))
        .and(path("/api/auth/verify"))
        .and(header("authorization", "Bearer expired-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Token expired"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.auth().verify_session().await;
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Token expired"));
    assert_eq!(credentials.read().await, None, "Credential should be cleared");
}

/// Test 403 expires the auth-token cookie
#[tokio::test]
async fn test_forbidden_expires_cookie() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let credentials = CookieCredentials::new(server.uri()).expect("Invalid cookie URL");
    credentials.set_token("cookie-token");
    let client = create_test_client(&server, credentials.clone());

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer cookie-token"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.auth().get_profile().await;
    assert!(!response.success);
    assert_eq!(response.error_message(), "Request failed with status 403");
    assert_eq!(credentials.read().await, None, "Cookie should be expired");
}

/// Test the credential is re-read for every request
#[tokio::test]
async fn test_credential_is_read_per_request() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let credentials = MemoryCredentials::new();
    let client = create_test_client(&server, credentials.clone());

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer later-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"_id": "adm1", "email": "ops@example.com"}
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let anonymous = client.auth().get_profile().await;
    assert!(!anonymous.success);

    credentials.set_token("later-token").await;
    let profile = client.auth().get_profile().await;
    assert!(profile.success);
    assert_eq!(
        profile.data.and_then(|admin| admin.email).as_deref(),
        Some("ops@example.com")
    );
}

use super::*;

fn test_config(base_url: &str) -> FirebaseConfig {
    FirebaseConfig {
        api_key: "test-key".into(),
        project_id: None,
        auth_domain: None,
        app_id: None,
        base_url: base_url.into(),
    }
}

// =============================================================================
// endpoint
// =============================================================================

#[test]
fn endpoint_appends_method_and_key() {
    let client = FirebaseClient::new(&test_config("https://identitytoolkit.googleapis.com/v1")).unwrap();
    assert_eq!(
        client.endpoint("signInWithPassword"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=test-key"
    );
}

#[test]
fn endpoint_trims_trailing_slash() {
    let client = FirebaseClient::new(&test_config("http://localhost:9099/identitytoolkit.googleapis.com/v1/")).unwrap();
    assert_eq!(
        client.endpoint("lookup"),
        "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:lookup?key=test-key"
    );
}

// =============================================================================
// request bodies
// =============================================================================

#[test]
fn password_request_uses_camel_case() {
    let body = PasswordRequest { email: "a@b.com", password: "pw", return_secure_token: true };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw", "returnSecureToken": true })
    );
}

#[test]
fn lookup_request_uses_camel_case() {
    let body = LookupRequest { id_token: "tok" };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "idToken": "tok" }));
}

// =============================================================================
// parse_password_response
// =============================================================================

#[test]
fn parse_password_response_extracts_token_and_user() {
    let json = r#"{
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "uid-123",
        "email": "diner@example.com",
        "idToken": "id-token-abc",
        "refreshToken": "refresh",
        "expiresIn": "3600",
        "registered": true
    }"#;
    let session = parse_password_response(json).unwrap();
    assert_eq!(session.id_token, "id-token-abc");
    assert_eq!(session.user.email, "diner@example.com");
    assert_eq!(session.user.provider_id, "uid-123");
}

#[test]
fn parse_password_response_missing_token_is_parse_error() {
    let err = parse_password_response(r#"{"localId":"uid"}"#).unwrap_err();
    assert!(matches!(err, IdentityError::Parse(_)));
}

// =============================================================================
// parse_lookup_response
// =============================================================================

#[test]
fn parse_lookup_response_returns_first_user() {
    let json = r#"{"kind":"identitytoolkit#GetAccountInfoResponse","users":[{"localId":"uid-1","email":"a@b.com","emailVerified":false}]}"#;
    let user = parse_lookup_response(json).unwrap();
    assert_eq!(user, User { email: "a@b.com".into(), provider_id: "uid-1".into() });
}

#[test]
fn parse_lookup_response_without_users_is_credential_error() {
    let err = parse_lookup_response(r#"{"kind":"identitytoolkit#GetAccountInfoResponse"}"#).unwrap_err();
    assert!(matches!(err, IdentityError::Credential { ref code } if code == "USER_NOT_FOUND"));
}

// =============================================================================
// parse_error
// =============================================================================

#[test]
fn error_code_strips_detail_suffix() {
    assert_eq!(error_code("WEAK_PASSWORD : Password should be at least 6 characters"), "WEAK_PASSWORD");
    assert_eq!(error_code("EMAIL_EXISTS"), "EMAIL_EXISTS");
}

#[test]
fn parse_error_classifies_credential_codes() {
    let body = r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS","errors":[]}}"#;
    let err = parse_error(400, body.to_owned());
    assert!(matches!(err, IdentityError::Credential { ref code } if code == "INVALID_LOGIN_CREDENTIALS"));
}

#[test]
fn parse_error_keeps_other_codes_as_response_errors() {
    let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key."}}"#;
    let err = parse_error(400, body.to_owned());
    assert!(matches!(err, IdentityError::Response { status: 400, .. }));
}

#[test]
fn parse_error_handles_non_json_bodies() {
    let err = parse_error(503, "upstream unavailable".to_owned());
    match err {
        IdentityError::Response { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

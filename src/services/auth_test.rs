use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::*;
use crate::state::test_helpers::{self, MockIdentity, TEST_EMAIL, TEST_PASSWORD};

fn offline_state() -> (AppState, Arc<MockIdentity>) {
    let mock = Arc::new(MockIdentity::with_account(TEST_EMAIL, TEST_PASSWORD));
    mock.set_offline(true);
    (test_helpers::test_app_state_with_identity(mock.clone()), mock)
}

// =============================================================================
// sign_in / sign_up
// =============================================================================

#[tokio::test]
async fn sign_in_valid_credentials_creates_session() {
    let state = test_helpers::test_app_state();
    let session = sign_in(&state, TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    assert_eq!(session.subject_email, TEST_EMAIL);
    assert_eq!(state.sessions.len().await, 1);
    assert!(state.sessions.verify(Some(&session.token)).await.is_ok());
}

#[tokio::test]
async fn sign_in_wrong_password_is_credential_error() {
    let state = test_helpers::test_app_state();
    let err = sign_in(&state, TEST_EMAIL, "wrong-password").await.unwrap_err();
    match &err {
        AuthError::Credential { code, message } => {
            assert_eq!(code, "INVALID_PASSWORD");
            assert_eq!(*message, "Invalid email or password.");
        }
        AuthError::Network(e) => panic!("expected credential error, got network: {e}"),
    }
    assert_eq!(err.user_message(), "Invalid email or password.");
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn sign_in_unreachable_provider_is_network_error() {
    let (state, _) = offline_state();
    let err = sign_in(&state, TEST_EMAIL, TEST_PASSWORD).await.unwrap_err();
    assert!(matches!(err, AuthError::Network(_)));
    assert_eq!(err.user_message(), "Could not reach the sign-in service. Please try again.");
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn sign_up_signs_the_new_account_in() {
    let state = test_helpers::test_app_state();
    let session = sign_up(&state, "new@example.com", "longenough").await.unwrap();
    assert_eq!(session.subject_email, "new@example.com");
    assert!(sign_in(&state, "new@example.com", "longenough").await.is_ok());
}

#[tokio::test]
async fn sign_up_existing_email_is_rejected() {
    let state = test_helpers::test_app_state();
    let err = sign_up(&state, TEST_EMAIL, "whatever1").await.unwrap_err();
    assert_eq!(err.user_message(), "An account with this email already exists.");
}

// =============================================================================
// establish_from_id_token
// =============================================================================

#[tokio::test]
async fn id_token_for_known_user_creates_session() {
    let state = test_helpers::test_app_state();
    let token = format!("id-token:{TEST_EMAIL}");
    let session = establish_from_id_token(&state, &token).await.unwrap();
    assert_eq!(session.user(), test_helpers::user_for(TEST_EMAIL));
}

#[tokio::test]
async fn garbage_id_token_is_credential_error() {
    let state = test_helpers::test_app_state();
    let err = establish_from_id_token(&state, "garbage").await.unwrap_err();
    assert!(matches!(err, AuthError::Credential { .. }));
    assert!(state.sessions.is_empty().await);
}

// =============================================================================
// sign_out
// =============================================================================

#[tokio::test]
async fn sign_out_destroys_session_and_notifies_provider() {
    let mock = Arc::new(MockIdentity::with_account(TEST_EMAIL, TEST_PASSWORD));
    let state = test_helpers::test_app_state_with_identity(mock.clone());
    let token = test_helpers::seed_session(&state).await;

    assert!(sign_out(&state, Some(&token)).await);
    assert!(state.sessions.verify(Some(&token)).await.is_err());
    assert_eq!(mock.sign_outs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sign_out_without_session_still_succeeds() {
    let state = test_helpers::test_app_state();
    assert!(!sign_out(&state, None).await);
    assert!(!sign_out(&state, Some("not-a-session")).await);
}

#[tokio::test]
async fn sign_out_ignores_provider_failure() {
    let (state, mock) = offline_state();
    let token = test_helpers::seed_session(&state).await;
    assert!(sign_out(&state, Some(&token)).await);
    assert!(state.sessions.is_empty().await);
    assert_eq!(mock.sign_outs.load(Ordering::SeqCst), 1);
}

// =============================================================================
// advance
// =============================================================================

#[test]
fn advance_follows_valid_transition() {
    assert_eq!(advance(SessionPhase::Anonymous, AuthEvent::Submit), SessionPhase::Authenticating);
}

#[test]
fn advance_keeps_phase_on_invalid_transition() {
    assert_eq!(advance(SessionPhase::Anonymous, AuthEvent::ProviderSucceeded), SessionPhase::Anonymous);
}

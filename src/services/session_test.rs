use super::*;

fn user() -> User {
    User { email: "diner@example.com".into(), provider_id: "uid-1".into() }
}

fn store() -> SessionStore {
    SessionStore::new(Duration::days(14))
}

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token / is_well_formed
// =============================================================================

#[test]
fn generate_token_is_well_formed() {
    let token = generate_token();
    assert_eq!(token.len(), TOKEN_LEN);
    assert!(is_well_formed(&token));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn is_well_formed_rejects_wrong_shapes() {
    assert!(!is_well_formed(""));
    assert!(!is_well_formed("abc"));
    assert!(!is_well_formed(&"A".repeat(TOKEN_LEN)));
    assert!(!is_well_formed(&"g".repeat(TOKEN_LEN)));
    assert!(!is_well_formed(&"a".repeat(TOKEN_LEN + 1)));
    assert!(is_well_formed(&"0f".repeat(TOKEN_LEN / 2)));
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn create_records_identity_and_expiry() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    let session = store.create_at(&user(), now).await;
    assert_eq!(session.subject_email, "diner@example.com");
    assert_eq!(session.provider_id, "uid-1");
    assert_eq!(session.issued_at, now);
    assert_eq!(session.expires_at, now + Duration::days(14));
    assert_eq!(session.user(), user());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn verify_accepts_live_session() {
    let store = store();
    let session = store.create(&user()).await;
    let verified = store.verify(Some(&session.token)).await.unwrap();
    assert_eq!(verified, session);
}

#[tokio::test]
async fn verify_missing_token() {
    let store = store();
    assert_eq!(store.verify(None).await, Err(SessionVerificationError::Missing));
    assert_eq!(store.verify(Some("")).await, Err(SessionVerificationError::Missing));
}

#[tokio::test]
async fn verify_malformed_token() {
    let store = store();
    assert_eq!(store.verify(Some("not-a-token")).await, Err(SessionVerificationError::Malformed));
}

#[tokio::test]
async fn verify_unknown_token() {
    let store = store();
    let token = generate_token();
    assert_eq!(store.verify(Some(&token)).await, Err(SessionVerificationError::Unknown));
}

#[tokio::test]
async fn verify_expired_session_without_removing_it() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    let session = store.create_at(&user(), now).await;

    let later = now + Duration::days(14);
    assert_eq!(store.verify_at(Some(&session.token), later).await, Err(SessionVerificationError::Expired));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn verify_just_before_expiry_succeeds() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    let session = store.create_at(&user(), now).await;
    let almost = now + Duration::days(14) - Duration::seconds(1);
    assert!(store.verify_at(Some(&session.token), almost).await.is_ok());
}

#[tokio::test]
async fn destroy_removes_session() {
    let store = store();
    let session = store.create(&user()).await;
    assert!(store.destroy(&session.token).await);
    assert!(!store.destroy(&session.token).await);
    assert_eq!(store.verify(Some(&session.token)).await, Err(SessionVerificationError::Unknown));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn sweep_removes_only_expired_sessions() {
    let store = store();
    let now = OffsetDateTime::now_utc();
    let old = store.create_at(&user(), now - Duration::days(15)).await;
    let fresh = store.create_at(&user(), now).await;

    assert_eq!(store.sweep_expired(now).await, 1);
    assert_eq!(store.verify_at(Some(&old.token), now).await, Err(SessionVerificationError::Unknown));
    assert!(store.verify_at(Some(&fresh.token), now).await.is_ok());
}

#[tokio::test]
async fn clones_share_the_same_table() {
    let store = store();
    let other = store.clone();
    let session = store.create(&user()).await;
    assert!(other.verify(Some(&session.token)).await.is_ok());
}

#[tokio::test]
async fn create_with_huge_ttl_saturates_expiry() {
    let store = SessionStore::new(Duration::seconds(1_000_000_000_000));
    let session = store.create(&user()).await;
    assert_eq!(session.expires_at, PrimitiveDateTime::MAX.assume_utc());
    assert!(store.verify(Some(&session.token)).await.is_ok());
}

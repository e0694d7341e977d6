//! Unit tests for SearchSessions.

use std::time::Duration;

use pdfbot_core::SessionKey;

use crate::SearchSessions;

const KEY: SessionKey = SessionKey {
    chat_id: 456,
    user_id: 123,
};

/// **Test: absent session reads as no pending search.**
#[tokio::test]
async fn test_absent_session_is_not_pending() {
    let sessions = SearchSessions::default();
    assert!(!sessions.is_pending(KEY).await);
    assert!(!sessions.take_pending_search(KEY).await);
    assert!(sessions.is_empty().await);
}

/// **Test: a pending search is consumed exactly once.**
#[tokio::test]
async fn test_take_pending_search_consumes_once() {
    let sessions = SearchSessions::default();
    sessions.begin_search(KEY).await;
    assert!(sessions.is_pending(KEY).await);

    assert!(sessions.take_pending_search(KEY).await);
    assert!(!sessions.take_pending_search(KEY).await);
    assert!(!sessions.is_pending(KEY).await);
}

#[tokio::test]
async fn test_sessions_are_scoped_by_chat_and_user() {
    let sessions = SearchSessions::default();
    sessions.begin_search(KEY).await;

    let other_user = SessionKey { user_id: 999, ..KEY };
    let other_chat = SessionKey { chat_id: -100, ..KEY };
    assert!(!sessions.take_pending_search(other_user).await);
    assert!(!sessions.take_pending_search(other_chat).await);
    assert!(sessions.take_pending_search(KEY).await);
}

/// **Test: concurrent takes on one session succeed exactly once.**
#[tokio::test]
async fn test_concurrent_take_succeeds_once() {
    let sessions = SearchSessions::default();
    sessions.begin_search(KEY).await;

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let sessions = sessions.clone();
            tokio::spawn(async move { sessions.take_pending_search(KEY).await })
        })
        .collect();

    let mut taken = 0;
    for task in tasks {
        if task.await.unwrap() {
            taken += 1;
        }
    }
    assert_eq!(taken, 1);
}

/// **Test: expired sessions read as absent and are pruned.**
#[tokio::test]
async fn test_expired_sessions_are_absent_and_pruned() {
    let sessions = SearchSessions::new(Some(Duration::ZERO));
    sessions.begin_search(KEY).await;
    assert_eq!(sessions.len().await, 1);
    assert!(!sessions.is_pending(KEY).await);

    assert_eq!(sessions.prune_expired().await, 1);
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn test_prune_keeps_live_sessions() {
    let sessions = SearchSessions::new(Some(Duration::from_secs(600)));
    sessions.begin_search(KEY).await;
    assert_eq!(sessions.prune_expired().await, 0);
    assert!(sessions.take_pending_search(KEY).await);
}

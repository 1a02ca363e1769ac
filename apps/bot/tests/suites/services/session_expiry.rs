use std::sync::Arc;
use std::time::Duration;

use duel_bot::domain::{ChallengeSession, Choice, GameSession, SessionKey};
use duel_bot::services::registry::{spawn_reaper, InMemorySessionStore, SessionStore};

#[tokio::test]
async fn reaper_sweeps_abandoned_challenges() {
    let store = Arc::new(InMemorySessionStore::new(Duration::from_millis(20)));
    for i in 0..5 {
        store
            .create(
                SessionKey::new(format!("abandoned-{i}")),
                GameSession::Challenge(ChallengeSession::new("u", Choice::Rock)),
            )
            .await
            .unwrap();
    }
    assert_eq!(store.len().await.unwrap(), 5);

    let reaper = spawn_reaper(store.clone(), Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(80)).await;
    reaper.abort();

    // Live count hides expired entries either way; the sweep is what matters.
    assert_eq!(store.len().await.unwrap(), 0);
    assert_eq!(store.purge_expired().await.unwrap(), 0);
}

//! Per-user dialog state and the in-memory session store.

use std::collections::HashMap;

use fx_engine::{Calculation, RecalcField, Scenario};
use tokio::sync::{Mutex, MutexGuard};

/// Where a user's dialog currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Idle,
    /// Scenario chosen, waiting for the amount.
    AwaitingFirst(Scenario),
    /// Amount received, waiting for the rate or desired profit.
    AwaitingSecond(Scenario, f64),
    /// Waiting for one new value to re-run the stored calculation with.
    AwaitingRecalc(Scenario, RecalcField),
}

/// One user's transient session: dialog state plus the last finished
/// calculation. Nothing here survives a restart.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: DialogState,
    pub last_calculation: Option<Calculation>,
}

/// In-memory session store keyed by user id. The whole map sits behind one
/// tokio mutex, so every read-modify-write of a user's session is atomic.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the whole store for a compound update. The guard may be held
    /// across awaits (rate fetch, sends); message volume is low and this is
    /// what keeps concurrent handlers for one user from racing.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, HashMap<i64, Session>> {
        self.inner.lock().await
    }

    /// Snapshot of a user's dialog state (Idle when no session exists).
    pub async fn state(&self, user_id: i64) -> DialogState {
        self.inner
            .lock()
            .await
            .get(&user_id)
            .map(|s| s.state.clone())
            .unwrap_or_default()
    }

    /// Snapshot of a user's last calculation.
    pub async fn last_calculation(&self, user_id: i64) -> Option<Calculation> {
        self.inner
            .lock()
            .await
            .get(&user_id)
            .and_then(|s| s.last_calculation.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_user_is_idle_with_no_calculation() {
        let store = SessionStore::new();
        assert_eq!(store.state(1).await, DialogState::Idle);
        assert!(store.last_calculation(1).await.is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated_per_user() {
        let store = SessionStore::new();
        {
            let mut sessions = store.lock().await;
            sessions.entry(1).or_default().state = DialogState::AwaitingFirst(Scenario::RublesToBaht);
        }
        assert_eq!(
            store.state(1).await,
            DialogState::AwaitingFirst(Scenario::RublesToBaht)
        );
        assert_eq!(store.state(2).await, DialogState::Idle);
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::DEFAULT_SESSION_TTL_SECS;
use crate::errors::AppError;
use crate::session::workspace::Workspace;

struct Entry {
    workspace: Workspace,
    last_active: Instant,
}

impl Entry {
    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_active) >= ttl
    }
}

/// In-memory workspaces keyed by session id. Nothing is persisted.
///
/// A workspace that sees no reads or writes for `ttl` is treated as gone and
/// is dropped by the next lookup or sweep.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_SESSION_TTL_SECS))
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn create(&self) -> Workspace {
        let workspace = Workspace::new();
        let mut sessions = self.inner.write().await;
        sessions.insert(
            workspace.id,
            Entry {
                workspace: workspace.clone(),
                last_active: Instant::now(),
            },
        );
        info!("Session {} created ({} active)", workspace.id, sessions.len());
        workspace
    }

    /// Returns a snapshot of the workspace. Busy flags are shared with the stored copy.
    pub async fn get(&self, id: Uuid) -> Result<Workspace, AppError> {
        self.update(id, |ws| ws.clone()).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Session {id} removed"))
            .ok_or_else(|| not_found(id))
    }

    /// Runs `f` against the stored workspace under the write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Workspace) -> R,
    ) -> Result<R, AppError> {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;

        if sessions.get(&id).is_some_and(|entry| entry.expired(now, self.ttl)) {
            sessions.remove(&id);
            info!("Session {id} expired");
        }

        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.last_active = now;
        Ok(f(&mut entry.workspace))
    }

    /// Drops every idle workspace. Returns how many were dropped.
    pub async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.expired(now, self.ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle sessions ({} active)", sessions.len());
        }
        evicted
    }

    pub async fn active_count(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Runs `evict_expired` every `period` for the life of the process.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = store.evict_expired().await;
                debug!("Session sweep done, {evicted} evicted");
            }
        })
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::workspace::{NavTarget, Tab};

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::default();
        let ws = store.create().await;
        let other = store.create().await;
        assert_ne!(ws.id, other.id);
        assert_eq!(store.get(ws.id).await.unwrap().id, ws.id);

        store.remove(ws.id).await.unwrap();
        assert!(matches!(store.get(ws.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(ws.id).await, Err(AppError::NotFound(_))));
        assert!(store.get(other.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_is_visible_to_later_reads() {
        let store = SessionStore::default();
        let id = store.create().await.id;
        let tab = store
            .update(id, |ws| ws.navigate(NavTarget::CoverLetter))
            .await
            .unwrap();
        assert_eq!(tab, Tab::CoverLetter);
        assert_eq!(store.get(id).await.unwrap().active_tab, Tab::CoverLetter);
    }

    #[tokio::test]
    async fn test_snapshot_shares_busy_flag() {
        let store = SessionStore::default();
        let id = store.create().await.id;
        let snapshot = store.get(id).await.unwrap();
        let _guard = snapshot.resume.generating.try_acquire().unwrap();
        assert!(store.get(id).await.unwrap().resume.generating.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires_after_ttl() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create().await.id;

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get(id).await.is_ok());

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert_eq!(store.active_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create().await.id;

        for _ in 0..5 {
            tokio::time::advance(Duration::from_secs(45)).await;
            store
                .update(id, |ws| ws.navigate(NavTarget::Linkedin))
                .await
                .unwrap();
        }
        assert_eq!(store.get(id).await.unwrap().active_tab, Tab::Linkedin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evict_expired_only_drops_idle_sessions() {
        let store = SessionStore::new(Duration::from_secs(60));
        let idle = store.create().await.id;
        tokio::time::advance(Duration::from_secs(30)).await;
        let fresh = store.create().await.id;

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(store.evict_expired().await, 1);
        assert!(store.get(idle).await.is_err());
        assert!(store.get(fresh).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_without_lookups() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.create().await;
        let sweeper = store.spawn_sweeper(Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(75)).await;
        assert_eq!(store.active_count().await, 0);
        sweeper.abort();
    }

    #[tokio::test]
    async fn test_update_unknown_session() {
        let store = SessionStore::default();
        let result = store.update(Uuid::new_v4(), |_| ()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

//! Session Store
//!
//! Process-local broadcast cell holding the latest [`Session`]. The auth
//! provider's client feeds it [`AuthChange`] events; local subscribers are
//! notified on every change.
//!
//! When a persistent storage capability is supplied the session survives
//! restarts. Without one the store runs in memory only. Storage failures are
//! logged and never block the in-memory update.

use std::sync::Arc;

use platform::storage::KeyValueStorage;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::domain::entity::session::{AuthChange, Session};
use crate::error::AuthResult;

/// Storage key for the serialized session
pub const SESSION_KEY: &str = "session";
/// Storage key for the raw auth token, cleared on logout
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Session>>,
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl SessionStore {
    pub fn new(storage: Option<Arc<dyn KeyValueStorage>>) -> Self {
        let (tx, _rx) = watch::channel(Session::anonymous());
        Self {
            tx: Arc::new(tx),
            storage,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(None)
    }

    pub fn has_persistent_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Restore the stored session, if any.
    ///
    /// Returns `true` when a stored session was loaded. Unreadable or
    /// undecodable data leaves the current value in place.
    pub fn init(&self) -> bool {
        let Some(storage) = &self.storage else {
            return false;
        };

        match load_session(storage.as_ref()) {
            Ok(Some(session)) => {
                tracing::debug!(
                    authenticated = session.authenticated,
                    "Session restored from storage"
                );
                self.tx.send_replace(session);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Stored session ignored");
                false
            }
        }
    }

    /// Replace the session, persisting it when storage is available
    pub fn set(&self, session: Session) {
        if let Some(storage) = &self.storage {
            if let Err(e) = save_session(storage.as_ref(), &session) {
                tracing::warn!(error = %e, "Failed to persist session");
            }
        }
        tracing::debug!(authenticated = session.authenticated, "Session updated");
        self.tx.send_replace(session);
    }

    /// Modify the session in place. Not persisted.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Session),
    {
        self.tx.send_modify(f);
    }

    /// Forget the session and any stored token
    pub fn logout(&self) {
        if let Some(storage) = &self.storage {
            for key in [SESSION_KEY, AUTH_TOKEN_KEY] {
                if let Err(e) = storage.remove(key) {
                    tracing::warn!(error = %e, key, "Failed to clear stored session");
                }
            }
        }
        tracing::debug!("Session cleared");
        self.tx.send_replace(Session::anonymous());
    }

    /// Apply an auth state change from the auth provider's client
    pub fn apply(&self, change: AuthChange) {
        self.set(Session::from(change));
    }

    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Apply every change received until all senders are dropped.
    ///
    /// Storage writes are blocking, so each change is applied on the
    /// blocking pool.
    pub fn listen(&self, mut changes: mpsc::Receiver<AuthChange>) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            while let Some(change) = changes.recv().await {
                let store = store.clone();
                if let Err(e) = tokio::task::spawn_blocking(move || store.apply(change)).await {
                    tracing::warn!(error = %e, "Auth change not applied");
                }
            }
            tracing::debug!("Auth change source closed");
        })
    }
}

fn load_session(storage: &dyn KeyValueStorage) -> AuthResult<Option<Session>> {
    match storage.get(SESSION_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn save_session(storage: &dyn KeyValueStorage, session: &Session) -> AuthResult<()> {
    let raw = serde_json::to_string(session)?;
    storage.set(SESSION_KEY, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::UserRecord;
    use platform::storage::{FileStorage, MemoryStorage};

    fn with_storage() -> (SessionStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(Some(storage.clone()));
        (store, storage)
    }

    #[test]
    fn test_starts_anonymous() {
        let store = SessionStore::in_memory();
        assert_eq!(store.current(), Session::anonymous());
        assert!(!store.has_persistent_storage());
        assert!(!store.init());
    }

    #[test]
    fn test_set_persists() {
        let (store, storage) = with_storage();
        let session = Session::authenticated(Some(UserRecord::new("u1")));

        store.set(session.clone());

        assert_eq!(store.current(), session);
        let raw = storage.get(SESSION_KEY).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Session>(&raw).unwrap(), session);
    }

    #[test]
    fn test_init_restores() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(SESSION_KEY, r#"{"authenticated":true,"user":{"id":"u9"}}"#)
            .unwrap();

        let store = SessionStore::new(Some(storage));
        assert!(store.init());
        assert!(store.current().authenticated);
        assert_eq!(store.current().user.unwrap().id, "u9");
    }

    #[test]
    fn test_init_ignores_garbage() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SESSION_KEY, "{oops").unwrap();

        let store = SessionStore::new(Some(storage));
        assert!(!store.init());
        assert_eq!(store.current(), Session::anonymous());
    }

    #[test]
    fn test_update_is_not_persisted() {
        let (store, storage) = with_storage();

        store.update(|s| s.authenticated = true);

        assert!(store.current().authenticated);
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_logout_clears_storage() {
        let (store, storage) = with_storage();
        storage.set(AUTH_TOKEN_KEY, "tok").unwrap();
        store.set(Session::authenticated(None));

        store.logout();

        assert_eq!(store.current(), Session::anonymous());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_apply_auth_change() {
        let store = SessionStore::in_memory();
        let user = UserRecord::new("u1").with_field("email", "a@example.com");

        store.apply(AuthChange::new(Some("tok".into()), Some(user.clone())));
        assert_eq!(store.current(), Session::authenticated(Some(user)));

        store.apply(AuthChange::new(None, None));
        assert_eq!(store.current(), Session::anonymous());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = SessionStore::in_memory();
        let mut rx = store.subscribe();

        store.set(Session::authenticated(None));

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().authenticated);
    }

    #[tokio::test]
    async fn test_listen_applies_events() {
        let store = SessionStore::in_memory();
        let (tx, rx) = mpsc::channel(4);
        let handle = store.listen(rx);

        tx.send(AuthChange::new(Some("tok".into()), Some(UserRecord::new("u1"))))
            .await
            .unwrap();
        tx.send(AuthChange::new(Some("tok2".into()), Some(UserRecord::new("u2"))))
            .await
            .unwrap();
        drop(tx);
        handle.await.unwrap();

        let session = store.current();
        assert!(session.authenticated);
        assert_eq!(session.user.unwrap().id, "u2");
    }

    #[tokio::test]
    async fn test_listen_persists_to_file_storage() {
        let dir = std::env::temp_dir().join(format!("auth-session-listen-{}", std::process::id()));
        let storage = Arc::new(FileStorage::open(&dir).unwrap());
        let store = SessionStore::new(Some(storage.clone()));
        let (tx, rx) = mpsc::channel(4);
        let handle = store.listen(rx);

        tx.send(AuthChange::new(Some("tok".into()), Some(UserRecord::new("u7"))))
            .await
            .unwrap();
        drop(tx);
        handle.await.unwrap();

        let raw = std::fs::read_to_string(dir.join(SESSION_KEY)).unwrap();
        let stored: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, store.current());
        assert_eq!(stored.user.unwrap().id, "u7");

        // A fresh store over the same directory restores it
        let restored = SessionStore::new(Some(storage));
        assert!(restored.init());
        assert!(restored.current().authenticated);

        std::fs::remove_dir_all(&dir).ok();
    }
}

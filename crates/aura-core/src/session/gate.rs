//! Session gate backed by a single persisted flag.
//!
//! The flag only steers which page is shown. Nothing is authenticated and
//! no credential is ever checked or stored.

use tracing::{debug, warn};

use aura_types::error::RepositoryError;
use aura_types::session::{GateDecision, Page, SESSION_FLAG_KEY, SESSION_FLAG_VALUE};

use crate::storage::kv_store::KvStore;

pub struct SessionGate<S> {
    store: S,
}

impl<S: KvStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the flag is set. Storage errors read as logged out.
    pub async fn is_logged_in(&self) -> bool {
        match self.store.get(SESSION_FLAG_KEY).await {
            Ok(value) => value.as_deref() == Some(SESSION_FLAG_VALUE),
            Err(e) => {
                warn!(error = %e, "failed to read session flag");
                false
            }
        }
    }

    /// Decide what to do when `page` loads.
    pub async fn check(&self, page: Page) -> GateDecision {
        let logged_in = self.is_logged_in().await;
        let decision = match (page.is_protected(), logged_in) {
            (true, false) => GateDecision::Redirect(Page::Login),
            (false, true) => GateDecision::Redirect(Page::MAIN),
            _ => GateDecision::Proceed,
        };
        debug!(%page, logged_in, ?decision, "session gate checked");
        decision
    }

    /// Set the flag. Returns the page to navigate to.
    pub async fn login(&self) -> Result<Page, RepositoryError> {
        self.store.set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE).await?;
        Ok(Page::MAIN)
    }

    /// Same as login: the signup form is cosmetic.
    pub async fn signup(&self) -> Result<Page, RepositoryError> {
        self.login().await
    }

    /// Clear the flag. Returns the page to navigate to.
    pub async fn logout(&self) -> Result<Page, RepositoryError> {
        self.store.remove(SESSION_FLAG_KEY).await?;
        Ok(Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryKvStore;

    #[tokio::test]
    async fn test_protected_page_redirects_when_logged_out() {
        let gate = SessionGate::new(MemoryKvStore::new());
        for page in [Page::Dashboard, Page::Workouts, Page::Coach] {
            assert_eq!(gate.check(page).await, GateDecision::Redirect(Page::Login));
        }
        assert_eq!(gate.check(Page::Login).await, GateDecision::Proceed);
    }

    #[tokio::test]
    async fn test_login_page_redirects_when_logged_in() {
        let gate = SessionGate::new(MemoryKvStore::new());
        assert_eq!(gate.login().await.unwrap(), Page::Dashboard);
        assert_eq!(
            gate.check(Page::Login).await,
            GateDecision::Redirect(Page::Dashboard)
        );
        assert_eq!(gate.check(Page::Coach).await, GateDecision::Proceed);
    }

    #[tokio::test]
    async fn test_logout_clears_flag() {
        let store = MemoryKvStore::new();
        let gate = SessionGate::new(store.clone());
        gate.signup().await.unwrap();
        assert!(gate.is_logged_in().await);

        assert_eq!(gate.logout().await.unwrap(), Page::Login);
        assert!(!gate.is_logged_in().await);
        assert!(store.get(SESSION_FLAG_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_only_exact_flag_value_counts() {
        let store = MemoryKvStore::new();
        store.set(SESSION_FLAG_KEY, "yes").await.unwrap();
        let gate = SessionGate::new(store);
        assert!(!gate.is_logged_in().await);
    }
}

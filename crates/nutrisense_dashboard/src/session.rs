//! Explicit session state with change notification.
//!
//! Login state lives in one place and flows to interested components through
//! a watch channel, not through ambient global storage. Components hold a
//! receiver and react to transitions; the context is the single writer.

use nutrisense_client::UserProfile;
use secrecy::SecretString;
use tokio::sync::watch;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub token: Option<SecretString>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Clone)]
pub struct SessionContext {
    tx: watch::Sender<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx }
    }

    /// Record a successful login and notify subscribers. The state is
    /// stored even when nobody is subscribed yet.
    pub fn login(&self, user: UserProfile, token: SecretString) {
        tracing::info!(email = %user.email, "session opened");
        self.tx.send_replace(SessionState {
            user: Some(user),
            token: Some(token),
        });
    }

    /// Clear the session and notify subscribers.
    pub fn logout(&self) {
        tracing::info!("session closed");
        self.tx.send_replace(SessionState::default());
    }

    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Subscribe to session transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }
    }

    #[tokio::test]
    async fn subscribers_observe_login_and_logout() {
        let session = SessionContext::new();
        let mut rx = session.subscribe();
        assert!(!rx.borrow().is_authenticated());

        session.login(user(), SecretString::new("tok".into()));
        rx.changed().await.expect("login change");
        assert!(rx.borrow().is_authenticated());
        assert_eq!(
            rx.borrow().user.as_ref().map(|u| u.name.clone()),
            Some("Alice".to_string())
        );

        session.logout();
        rx.changed().await.expect("logout change");
        assert!(!rx.borrow().is_authenticated());
    }

    #[test]
    fn state_is_kept_without_any_subscriber() {
        let session = SessionContext::new();
        session.login(user(), SecretString::new("tok".into()));
        assert!(session.current().is_authenticated());

        // A late subscriber sees the state recorded before it existed.
        let rx = session.subscribe();
        assert!(rx.borrow().is_authenticated());
    }

    #[test]
    fn current_reflects_latest_state() {
        let session = SessionContext::new();
        session.login(user(), SecretString::new("tok".into()));
        assert!(session.current().is_authenticated());
        session.logout();
        assert!(!session.current().is_authenticated());
    }
}

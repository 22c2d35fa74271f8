//! Local anonymous identity provider.

use async_trait::async_trait;
use securepad_core::error::Result;
use securepad_core::identity::{IdentityProvider, SessionToken};
use tokio::sync::watch;
use uuid::Uuid;

/// [`IdentityProvider`] that mints anonymous tokens in process.
///
/// Every sign-in issues a fresh random uid; auth-state changes are broadcast
/// to all subscribers.
#[derive(Debug)]
pub struct LocalIdentityProvider {
    state: watch::Sender<Option<SessionToken>>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    /// Starts with an already signed-in session (a restored login).
    pub fn signed_in(token: SessionToken) -> Self {
        let (state, _) = watch::channel(Some(token));
        Self { state }
    }

    pub fn current(&self) -> Option<SessionToken> {
        self.state.borrow().clone()
    }
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in_anonymously(&self) -> Result<SessionToken> {
        let token = SessionToken::anonymous(Uuid::new_v4().to_string());
        tracing::info!("[LocalIdentity] Signed in anonymously as {}", token.uid);
        self.state.send_replace(Some(token.clone()));
        Ok(token)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(previous) = self.state.send_replace(None) {
            tracing::info!("[LocalIdentity] Signed out {}", previous.uid);
        }
        Ok(())
    }

    fn auth_state(&self) -> watch::Receiver<Option<SessionToken>> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_sees_current_state_immediately() {
        let provider = LocalIdentityProvider::signed_in(SessionToken::anonymous("restored"));
        let receiver = provider.auth_state();
        assert_eq!(
            receiver.borrow().as_ref().map(|t| t.uid.as_str()),
            Some("restored")
        );
    }

    #[tokio::test]
    async fn test_sign_in_and_out_notify_subscribers() {
        let provider = LocalIdentityProvider::new();
        let mut receiver = provider.auth_state();
        assert!(receiver.borrow().is_none());

        let token = provider.sign_in_anonymously().await.unwrap();
        assert!(token.is_anonymous);
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().as_ref(), Some(&token));

        provider.sign_out().await.unwrap();
        receiver.changed().await.unwrap();
        assert!(receiver.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn test_each_sign_in_gets_fresh_uid() {
        let provider = LocalIdentityProvider::new();
        let first = provider.sign_in_anonymously().await.unwrap();
        let second = provider.sign_in_anonymously().await.unwrap();
        assert_ne!(first.uid, second.uid);
        assert_eq!(provider.current(), Some(second));
    }
}

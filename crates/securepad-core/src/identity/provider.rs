//! Identity provider trait.

use super::model::SessionToken;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::watch;

/// Anonymous-identity capability.
///
/// Failures are reported as [`crate::PadError::Auth`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in without credentials and returns the new session token.
    async fn sign_in_anonymously(&self) -> Result<SessionToken>;

    /// Ends the provider-side session.
    async fn sign_out(&self) -> Result<()>;

    /// Subscribes to auth-state changes.
    ///
    /// The receiver holds the current state (`None` when signed out) right
    /// away and is notified on every change.
    fn auth_state(&self) -> watch::Receiver<Option<SessionToken>>;
}

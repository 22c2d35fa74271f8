//! Password sign-in and the auth session.
//!
//! The password is never checked against anything: any password of valid
//! shape opens (or creates) the pad its space key points at. Sign-in only
//! obtains an anonymous identity from the provider.

use securepad_core::config::PadConfig;
use securepad_core::error::{PadError, Result};
use securepad_core::identity::{IdentityProvider, SessionToken};
use securepad_core::space::SpaceKey;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

const MSG_EMPTY_PASSWORD: &str = "Please enter a password";
const MSG_AUTH_FAILED: &str = "Failed to authenticate. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated,
}

/// A signed-in user together with the password they typed.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    password: String,
}

impl Session {
    pub fn new(token: SessionToken, password: impl Into<String>) -> Self {
        Self {
            token,
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Key of the pad this session edits.
    pub fn space_key(&self) -> SpaceKey {
        SpaceKey::derive(&self.password)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Drives the password form and tracks the identity provider's state.
///
/// # Lifecycle
///
/// 1. `is_loading()` is true until the first [`sync_auth_state`] call.
/// 2. [`submit`] validates the password, signs in anonymously and keeps the
///    password in memory.
/// 3. [`sign_out`] ends the provider session and forgets the password.
///
/// [`sync_auth_state`]: SessionController::sync_auth_state
/// [`submit`]: SessionController::submit
/// [`sign_out`]: SessionController::sign_out
pub struct SessionController {
    identity: Arc<dyn IdentityProvider>,
    min_password_len: usize,
    phase: AuthPhase,
    token: Option<SessionToken>,
    password: Option<String>,
    last_error: Option<String>,
    auth_loading: bool,
}

impl SessionController {
    pub fn new(identity: Arc<dyn IdentityProvider>, min_password_len: usize) -> Self {
        Self {
            identity,
            min_password_len,
            phase: AuthPhase::Unauthenticated,
            token: None,
            password: None,
            last_error: None,
            auth_loading: true,
        }
    }

    pub fn from_config(identity: Arc<dyn IdentityProvider>, config: &PadConfig) -> Self {
        Self::new(identity, config.min_password_len)
    }

    /// Handles the password form.
    ///
    /// # Errors
    ///
    /// - `PadError::Validation` for a blank or too short password; the
    ///   identity provider is not called.
    /// - `PadError::Auth` when anonymous sign-in fails; the controller goes
    ///   back to `Unauthenticated` and the form can be resubmitted.
    pub async fn submit(&mut self, password: &str) -> Result<Session> {
        if let Err(e) = self.validate(password) {
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        self.last_error = None;
        self.phase = AuthPhase::Authenticating;

        match self.identity.sign_in_anonymously().await {
            Ok(token) => {
                tracing::info!("[Session] Signed in as {}", token.uid);
                self.token = Some(token.clone());
                self.password = Some(password.to_string());
                self.phase = AuthPhase::Authenticated;
                Ok(Session::new(token, password))
            }
            Err(e) => {
                tracing::error!("[Session] Anonymous sign-in failed: {}", e);
                self.phase = AuthPhase::Unauthenticated;
                self.last_error = Some(MSG_AUTH_FAILED.to_string());
                Err(PadError::auth(MSG_AUTH_FAILED))
            }
        }
    }

    /// Ends the provider session and forgets the password.
    ///
    /// On failure the error is logged and returned and the session stays
    /// as it was.
    pub async fn sign_out(&mut self) -> Result<()> {
        if let Err(e) = self.identity.sign_out().await {
            tracing::error!("[Session] Sign-out failed: {}", e);
            return Err(e);
        }
        tracing::info!("[Session] Signed out");
        self.reset();
        Ok(())
    }

    /// Applies an auth-state notification from the provider.
    ///
    /// A signed-out state drops the password as well, so a provider-side
    /// sign-out closes the editor.
    pub fn sync_auth_state(&mut self, token: Option<SessionToken>) {
        self.auth_loading = false;
        match token {
            Some(token) => {
                if self.password.is_some() {
                    self.phase = AuthPhase::Authenticated;
                }
                self.token = Some(token);
            }
            None => {
                if self.token.is_some() {
                    tracing::debug!("[Session] Provider reported sign-out");
                }
                self.reset();
            }
        }
    }

    /// Subscribes to the provider's auth-state stream.
    pub fn watch_auth(&self) -> watch::Receiver<Option<SessionToken>> {
        self.identity.auth_state()
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// True until the provider reported its initial state.
    pub fn is_loading(&self) -> bool {
        self.auth_loading
    }

    /// The editor is shown only with both a token and a password.
    pub fn is_editor_visible(&self) -> bool {
        self.token.is_some() && self.password.is_some()
    }

    pub fn session(&self) -> Option<Session> {
        match (&self.token, &self.password) {
            (Some(token), Some(password)) => Some(Session::new(token.clone(), password.clone())),
            _ => None,
        }
    }

    /// Message to show under the password field.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn validate(&self, password: &str) -> Result<()> {
        if password.trim().is_empty() {
            return Err(PadError::validation(MSG_EMPTY_PASSWORD));
        }
        // Length in UTF-16 units, the same units the space key is hashed over.
        if password.encode_utf16().count() < self.min_password_len {
            return Err(PadError::validation(format!(
                "Password must be at least {} characters",
                self.min_password_len
            )));
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.token = None;
        self.password = None;
        self.phase = AuthPhase::Unauthenticated;
    }
}

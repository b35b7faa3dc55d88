//! Session Provider
//!
//! Typed wrappers over the bridge's auth commands. The provider owns the
//! whole session lifecycle; this side only issues calls and listens on the
//! `session` topic for the current user (or null). Session restoration on
//! load arrives through the same topic.

use serde::{Deserialize, Serialize};

use crate::bridge::{self, Subscription};
use crate::error::AuthError;

/// The authenticated user as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct CredentialArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct NoArgs {}

pub async fn sign_up(email: &str, password: &str) -> Result<(), AuthError> {
    if !bridge::available() {
        return Err(AuthError::BridgeUnavailable);
    }
    bridge::invoke_unit("signUp", &CredentialArgs { email, password })
        .await
        .map_err(AuthError::Provider)
}

pub async fn sign_in(email: &str, password: &str) -> Result<(), AuthError> {
    if !bridge::available() {
        return Err(AuthError::BridgeUnavailable);
    }
    bridge::invoke_unit("signIn", &CredentialArgs { email, password })
        .await
        .map_err(AuthError::Provider)
}

pub async fn sign_out() -> Result<(), AuthError> {
    if !bridge::available() {
        return Err(AuthError::BridgeUnavailable);
    }
    bridge::invoke_unit("signOut", &NoArgs {})
        .await
        .map_err(AuthError::Provider)
}

/// Listen for session changes for the lifetime of the app. The provider
/// pushes the current state immediately, which settles restoration; without
/// a bridge there is nothing to restore and `None` is returned so the caller
/// can settle it directly.
pub fn subscribe_session<F>(on_change: F) -> Option<Subscription>
where
    F: FnMut(Option<SessionUser>) + 'static,
{
    if !bridge::available() {
        return None;
    }
    match bridge::subscribe_json("session", &NoArgs {}, on_change) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            web_sys::console::error_1(&format!("[AUTH] session subscribe failed: {}", err).into());
            None
        }
    }
}

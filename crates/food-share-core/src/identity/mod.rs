//! Identity Provider
//!
//! Abstract sign-in surface plus the REST-backed implementation.
//! Futures are `?Send`: everything runs on the browser's single thread.

mod firebase;
mod session;

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::AuthResult;

pub use firebase::FirebaseIdentity;
pub use session::{MemorySessionStore, SessionStore};

/// Credential obtained from a federated provider's own sign-in flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdpCredential {
    /// Provider id, e.g. `google.com`
    pub provider_id: String,
    /// OpenID Connect id token issued by that provider
    pub id_token: String,
}

impl IdpCredential {
    pub fn google(id_token: impl Into<String>) -> Self {
        Self {
            provider_id: "google.com".to_string(),
            id_token: id_token.into(),
        }
    }
}

/// Operations the front-end needs from the identity service
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Create an account, then set its display name and photo
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        photo_url: Option<&str>,
    ) -> AuthResult<Session>;

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session>;

    async fn sign_in_with_idp(&self, credential: &IdpCredential) -> AuthResult<Session>;

    async fn update_profile(
        &self,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> AuthResult<Session>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// Cached session, without touching the network
    fn current_session(&self) -> Option<Session>;

    /// Bearer token for the current session, `None` when signed out.
    /// With `force_refresh` the refresh token is always exchanged.
    async fn fresh_token(&self, force_refresh: bool) -> AuthResult<Option<String>>;
}

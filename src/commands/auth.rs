//! Auth Commands
//!
//! Frontend bindings for identity operations.

use food_share_core::forms::Registration;
use food_share_core::{AuthError, IdentityProvider, IdpCredential, UserProfile};

use super::{client, google};

/// Profile of the cached session, if any
pub fn current_user() -> Option<UserProfile> {
    client().identity().current_session().map(|session| session.profile)
}

/// Re-validate the cached session after a page load.
///
/// Forces a token refresh, then presents the new token to the API root.
/// Returns the profile if the session survived.
pub async fn restore_session() -> Option<UserProfile> {
    let client = client();
    let session = client.identity().current_session()?;

    match client.identity().fresh_token(true).await {
        Ok(Some(_)) => {}
        Ok(None) => return None,
        Err(err) if err.is_session_dead() => {
            log::warn!("[auth] stored session rejected: {}", err);
            return None;
        }
        // Offline or provider hiccup: keep the cached identity
        Err(err) => log::warn!("[auth] token refresh failed: {}", err),
    }

    match client.verify_session().await {
        Ok(response) => log::debug!("[auth] backend accepted token: {}", response),
        Err(err) => log::error!("[auth] backend token check failed: {}", err),
    }
    Some(session.profile)
}

pub async fn sign_in(email: &str, password: &str) -> Result<UserProfile, String> {
    client()
        .identity()
        .sign_in(email, password)
        .await
        .map(|session| session.profile)
        .map_err(|e| {
            log::error!("[auth] sign-in failed: {}", e);
            e.user_message()
        })
}

/// Create an account. `AuthError::ProfileUpdate` means the account exists
/// and is signed in, only the display name / photo are missing.
pub async fn sign_up(registration: &Registration) -> Result<UserProfile, AuthError> {
    client()
        .identity()
        .sign_up(
            &registration.email,
            &registration.password,
            &registration.display_name,
            registration.photo_url.as_deref(),
        )
        .await
        .map(|session| session.profile)
        .map_err(|e| {
            log::error!("[auth] sign-up failed: {}", e);
            e
        })
}

pub async fn sign_in_with_google() -> Result<UserProfile, String> {
    let id_token = google::google_id_token().await?;
    client()
        .identity()
        .sign_in_with_idp(&IdpCredential::google(id_token))
        .await
        .map(|session| session.profile)
        .map_err(|e| {
            log::error!("[auth] federated sign-in failed: {}", e);
            e.user_message()
        })
}

pub async fn sign_out() -> Result<(), String> {
    client().identity().sign_out().await.map_err(|e| e.user_message())
}

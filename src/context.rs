//! Application Context
//!
//! Auth state shared via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_share_core::forms::Registration;
use food_share_core::AuthError;

use crate::commands;
use crate::models::UserProfile;

/// Result of an account creation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    Registered,
    /// Account created and signed in, profile fields not saved
    RegisteredWithoutProfile(String),
    Failed(String),
}

/// App-wide auth signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Signed-in user - read
    pub user: ReadSignal<Option<UserProfile>>,
    /// Signed-in user - write
    set_user: WriteSignal<Option<UserProfile>>,
    /// True until the cached session has been re-validated - read
    pub loading: ReadSignal<bool>,
    /// True until the cached session has been re-validated - write
    set_loading: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new(
        user: (ReadSignal<Option<UserProfile>>, WriteSignal<Option<UserProfile>>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.get().is_some()
    }

    /// Re-validate the cached session (runs once per page load)
    pub fn restore(&self) {
        let ctx = *self;
        spawn_local(async move {
            let profile = commands::restore_session().await;
            match &profile {
                Some(p) => log::info!("[auth] session restored for {}", p.uid),
                None => log::warn!("[auth] no user logged in, token not sent"),
            }
            ctx.set_user.set(profile);
            ctx.set_loading.set(false);
        });
    }

    pub async fn sign_in(self, email: &str, password: &str) -> Result<(), String> {
        let profile = commands::sign_in(email, password).await?;
        self.set_user.set(Some(profile));
        Ok(())
    }

    pub async fn sign_in_with_google(self) -> Result<(), String> {
        let profile = commands::sign_in_with_google().await?;
        self.set_user.set(Some(profile));
        Ok(())
    }

    pub async fn sign_up(self, registration: Registration) -> SignUpOutcome {
        match commands::sign_up(&registration).await {
            Ok(profile) => {
                self.set_user.set(Some(profile));
                SignUpOutcome::Registered
            }
            Err(err @ AuthError::ProfileUpdate { .. }) => {
                // Signed in regardless; show what we have
                self.set_user.set(commands::current_user());
                SignUpOutcome::RegisteredWithoutProfile(err.user_message())
            }
            Err(err) => SignUpOutcome::Failed(err.user_message()),
        }
    }

    /// The provider dropped the session; forget the user locally
    pub fn expire(&self) {
        log::warn!("[auth] session expired, signing out locally");
        self.set_user.set(None);
    }

    pub async fn sign_out(self) -> Result<(), String> {
        commands::sign_out().await?;
        self.set_user.set(None);
        Ok(())
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

//! Remote Command Wrappers
//!
//! Frontend bindings to the identity provider and the remote API,
//! organized by domain. Every wrapper returns a user-facing message on error.

mod auth;
mod food;
mod google;
mod request;
mod session_store;

use food_share_core::{ApiClient, Config, FirebaseIdentity};

pub use session_store::{LocalSessionStore, SESSION_EXPIRED_EVENT};

/// API client with the browser-backed identity provider
pub type Client = ApiClient<FirebaseIdentity<LocalSessionStore>>;

/// Build a client for one call. Session state lives in `localStorage`,
/// so clients are cheap and carry nothing between calls.
pub fn client() -> Client {
    let config = Config::from_build_env();
    ApiClient::new(&config, FirebaseIdentity::new(&config, LocalSessionStore))
}

// Re-export all public items
pub use auth::*;
pub use food::*;
pub use request::*;

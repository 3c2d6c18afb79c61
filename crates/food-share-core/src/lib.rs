//! Food Share Core
//!
//! Platform-neutral half of the Food Share front-end: data model, identity
//! provider client, authenticated API client and the small amount of
//! client-side logic (listing filter/sort, form parsing, route guard).
//! Compiles for `wasm32-unknown-unknown` and native targets alike.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod identity;
pub mod listing;
pub mod routes;

pub use api::ApiClient;
pub use config::Config;
pub use domain::{Food, FoodRequest, FoodStatus, FoodUpdate, NewFood, NewFoodRequest, Session, UserProfile};
pub use error::{ApiError, ApiResult, AuthError, AuthResult, FormError};
pub use identity::{FirebaseIdentity, IdentityProvider, IdpCredential, MemorySessionStore, SessionStore};

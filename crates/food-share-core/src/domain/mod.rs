//! Domain Layer
//!
//! Transient client-side copies of what the remote API owns.
//! Nothing here enforces invariants; the API validates.

mod food;
mod request;
mod user;

pub use food::{Food, FoodStatus, FoodUpdate, NewFood};
pub use request::{FoodRequest, NewFoodRequest};
pub use user::{Session, UserProfile, DEFAULT_TOKEN_LIFETIME_SECS};

//! UI Components
//!
//! Reusable Leptos components.

mod banner;
mod food_card;
mod header;
mod modal;
mod require_auth;
mod toast_host;

pub use banner::Banner;
pub use food_card::FoodCard;
pub use header::Header;
pub use modal::{ConfirmModal, Modal};
pub use require_auth::RequireAuth;
pub use toast_host::ToastHost;

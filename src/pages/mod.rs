//! Pages
//!
//! One component per route.

mod add_food;
mod available_foods;
mod food_details;
mod home;
mod login;
mod manage_foods;
mod my_requests;
mod not_found;
mod register;

pub use add_food::AddFoodPage;
pub use available_foods::AvailableFoodsPage;
pub use food_details::FoodDetailsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use manage_foods::ManageFoodsPage;
pub use my_requests::MyRequestsPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;

pub mod auth;
pub mod recipe;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use recipe::{Author, Recipe};
pub use store::UserInfo;

//! Shared page views.
//!
//! Each page takes navigation callbacks instead of a router so the platform
//! crate decides how a [`crate::PageRole`] maps onto its routes.

mod shell;
pub use shell::PageShell;

mod recipes;
pub use recipes::RecipesPage;

mod recipe_detail;
pub use recipe_detail::RecipeDetailPage;

mod login;
pub use login::LoginPage;

mod register;
pub use register::RegisterPage;

mod dashboard;
pub use dashboard::DashboardPage;

mod profile;
pub use profile::ProfilePage;

mod layout;
pub use layout::AppLayout;

mod home;
pub use home::{Home, Recipes};

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod login;
pub use login::{Login, Register};

mod dashboard;
pub use dashboard::{Dashboard, Profile};

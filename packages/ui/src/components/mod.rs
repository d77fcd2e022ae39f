//! Shared presentational components.
//!
//! Components take plain view models and callbacks; routing stays in the
//! platform crate.

mod back_to_top;
pub use back_to_top::BackToTop;

mod lazy_image;
pub use lazy_image::LazyImage;

mod navbar;
pub use navbar::Navbar;

mod print_button;
pub use print_button::PrintButton;

mod recipe_card;
pub use recipe_card::{EmptyListing, NoRecipesYet, OwnedRecipeCard, RecipeCard};

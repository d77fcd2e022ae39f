//! Pure view models: data in, display strings out.
//!
//! Components in [`crate::components`] only lay these out; everything that can
//! be decided without a DOM is decided here so it can be unit tested.

use api::Recipe;
use store::UserInfo;

/// Stock photo shown for recipes without an image.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&q=80&w=1000";

const DEFAULT_BIO: &str = "Share your favorite Asian recipes with the community.";

/// Cut `text` to `max_chars` characters, appending `...` only when something was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Profile image, or a generated initials avatar.
pub fn avatar_url(user: &UserInfo) -> String {
    match &user.profile_image {
        Some(url) if !url.is_empty() => url.clone(),
        _ => format!(
            "https://ui-avatars.com/api/?name={}&background=ff6b6b&color=fff",
            urlencoding::encode(user.display_name())
        ),
    }
}

/// CSS modifier class for a cuisine badge.
pub fn cuisine_class(cuisine: &str) -> String {
    cuisine.to_lowercase()
}

fn image_or_fallback(recipe: &Recipe) -> String {
    match &recipe.image {
        Some(url) if !url.is_empty() => url.clone(),
        _ => FALLBACK_IMAGE.to_string(),
    }
}

/// JS-style number display: `4` for whole values, `4.5` otherwise.
pub fn format_rating(rating: f64) -> String {
    format!("{rating}")
}

/// `base` plus `animate-in` once the element has been seen.
pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} animate-in")
    } else {
        base.to_string()
    }
}

/// Card on the public listing.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeCardView {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub cuisine: String,
    pub cuisine_class: String,
    pub image: String,
}

impl RecipeCardView {
    pub fn new(recipe: &Recipe, preview_chars: usize) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            preview: truncate(&recipe.description, preview_chars),
            cuisine: recipe.cuisine_type.clone(),
            cuisine_class: cuisine_class(&recipe.cuisine_type),
            image: image_or_fallback(recipe),
        }
    }
}

/// What the public listing shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingView {
    /// Call-to-action empty state.
    Empty,
    Cards(Vec<RecipeCardView>),
}

impl ListingView {
    pub fn new(recipes: &[Recipe], preview_chars: usize) -> Self {
        if recipes.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Cards(
                recipes
                    .iter()
                    .map(|r| RecipeCardView::new(r, preview_chars))
                    .collect(),
            )
        }
    }
}

/// Card on the dashboard's "my recipes" grid.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedRecipeView {
    pub id: String,
    pub title: String,
    pub cuisine: String,
    pub cuisine_class: String,
    pub image: String,
    pub views: u64,
    pub rating: String,
}

impl OwnedRecipeView {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            cuisine: recipe.cuisine_type.clone(),
            cuisine_class: cuisine_class(&recipe.cuisine_type),
            image: image_or_fallback(recipe),
            views: recipe.views(),
            rating: format_rating(recipe.rating()),
        }
    }
}

/// Full recipe page.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetailView {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub cuisine_class: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub views: u64,
    pub rating: String,
    pub author: Option<String>,
}

impl RecipeDetailView {
    pub fn new(recipe: &Recipe) -> Self {
        let author = match &recipe.author {
            Some(api::Author::Embedded { username, .. }) => username.clone(),
            _ => None,
        };
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            cuisine: recipe.cuisine_type.clone(),
            cuisine_class: cuisine_class(&recipe.cuisine_type),
            image: image_or_fallback(recipe),
            ingredients: recipe.ingredients.clone(),
            views: recipe.views(),
            rating: format_rating(recipe.rating()),
            author,
        }
    }
}

/// Dashboard welcome header and profile summary.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSummary {
    pub greeting: String,
    pub username: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
}

impl ProfileSummary {
    pub fn new(user: &UserInfo) -> Self {
        let bio = match &user.bio {
            Some(bio) if !bio.trim().is_empty() => bio.clone(),
            _ => DEFAULT_BIO.to_string(),
        };
        Self {
            greeting: format!("Welcome back, {}!", user.display_name()),
            username: user.display_name().to_string(),
            role: user.role.clone(),
            bio,
            avatar: avatar_url(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recipe, user};

    #[test]
    fn test_truncate_long_text_appends_ellipsis() {
        let text = "x".repeat(100);
        let cut = truncate(&text, 80);
        assert_eq!(cut.len(), 83);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..80], &text[..80]);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let text = "y".repeat(50);
        assert_eq!(truncate(&text, 80), text);
        let exact = "z".repeat(80);
        assert_eq!(truncate(&exact, 80), exact);
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "麻婆豆腐".repeat(30);
        let cut = truncate(&text, 80);
        assert_eq!(cut.chars().count(), 83);
    }

    #[test]
    fn test_avatar_fallback_is_encoded() {
        let mut u = user("u1");
        u.username = "Mei Lin".to_string();
        assert_eq!(
            avatar_url(&u),
            "https://ui-avatars.com/api/?name=Mei%20Lin&background=ff6b6b&color=fff"
        );
        u.profile_image = Some("https://cdn/me.png".to_string());
        assert_eq!(avatar_url(&u), "https://cdn/me.png");
    }

    #[test]
    fn test_listing_view() {
        assert_eq!(ListingView::new(&[], 80), ListingView::Empty);

        let mut r = recipe("r1", "Laksa");
        r.cuisine_type = "Malaysian".to_string();
        r.description = "Coconut curry noodle soup".to_string();
        let ListingView::Cards(cards) = ListingView::new(&[r], 80) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].cuisine_class, "malaysian");
        assert_eq!(cards[0].preview, "Coconut curry noodle soup");
        assert_eq!(cards[0].image, FALLBACK_IMAGE);
    }

    #[test]
    fn test_owned_recipe_rating_display() {
        let mut r = recipe("r1", "Laksa");
        assert_eq!(OwnedRecipeView::new(&r).rating, "0");
        r.rating = Some(4.5);
        r.views = Some(9);
        let view = OwnedRecipeView::new(&r);
        assert_eq!(view.rating, "4.5");
        assert_eq!(view.views, 9);
    }

    #[test]
    fn test_profile_view_fallbacks() {
        let view = ProfileSummary::new(&user("u1"));
        assert_eq!(view.greeting, "Welcome back, mei!");
        assert_eq!(view.bio, DEFAULT_BIO);
    }

    #[test]
    fn test_reveal_class_adds_animation_once_seen() {
        assert_eq!(reveal_class("recipe-card", false), "recipe-card");
        assert_eq!(reveal_class("recipe-card", true), "recipe-card animate-in");
    }
}

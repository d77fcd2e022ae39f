//! Dashboard data: the signed-in user's profile, their recipes, and the
//! aggregate stats shown above them.
//!
//! Loads never fail outward. A profile error falls back to the stored user, a
//! listing error yields an empty recipe set. Only [`delete_recipe`] reports
//! failure, so the caller can keep the previous render.

use api::{ApiError, Recipe, RecipeApi};
use store::{Session, UserInfo};

/// Aggregates over the user's recipes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_recipes: usize,
    pub total_views: u64,
    /// Mean rating with one decimal place; `"0.0"` with no recipes.
    pub avg_rating: String,
    pub favorites: u64,
}

impl DashboardStats {
    pub fn new(recipes: &[Recipe]) -> Self {
        let avg_rating = if recipes.is_empty() {
            "0.0".to_string()
        } else {
            let sum: f64 = recipes.iter().map(Recipe::rating).sum();
            one_decimal_half_up(sum / recipes.len() as f64)
        };
        Self {
            total_recipes: recipes.len(),
            total_views: recipes.iter().map(Recipe::views).sum(),
            avg_rating,
            favorites: recipes.iter().map(Recipe::likes).sum(),
        }
    }

    /// Numeric target for the rating counter animation.
    pub fn avg_rating_value(&self) -> f64 {
        self.avg_rating.parse().unwrap_or(0.0)
    }
}

/// `{:.1}` rounds ties to even (4.25 -> "4.2"); ratings display ties upward.
fn one_decimal_half_up(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// The user's recipes and the stats derived from that same fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRecipes {
    pub recipes: Vec<Recipe>,
    pub stats: DashboardStats,
}

impl UserRecipes {
    /// Keep the recipes `user_id` authored, in fetch order.
    pub fn from_all(all: Vec<Recipe>, user_id: &str) -> Self {
        let recipes: Vec<Recipe> = all
            .into_iter()
            .filter(|r| r.is_authored_by(user_id))
            .collect();
        let stats = DashboardStats::new(&recipes);
        Self { recipes, stats }
    }
}

/// Fetch the profile, falling back to the cached user on any error.
pub async fn load_profile<A: RecipeApi>(api: &A, session: &Session) -> UserInfo {
    match api.profile(&session.token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Profile fetch failed, using stored user: {}", e);
            session.user.clone()
        }
    }
}

/// Fetch every recipe and keep the user's own.
pub async fn load_user_recipes<A: RecipeApi>(api: &A, user_id: &str) -> UserRecipes {
    match api.recipes().await {
        Ok(all) => UserRecipes::from_all(all, user_id),
        Err(e) => {
            tracing::error!("Error loading user recipes: {}", e);
            UserRecipes::default()
        }
    }
}

/// Delete a recipe, then reload the user's list.
///
/// On error nothing is reloaded; the caller keeps what it already shows.
pub async fn delete_recipe<A: RecipeApi>(
    api: &A,
    session: &Session,
    recipe_id: &str,
) -> Result<UserRecipes, ApiError> {
    api.delete_recipe(&session.token, recipe_id)
        .await
        .inspect_err(|e| tracing::error!("Error deleting recipe {}: {}", recipe_id, e))?;
    tracing::info!("Deleted recipe {}", recipe_id);
    Ok(load_user_recipes(api, &session.user.id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recipe, user, FakeApi};
    use api::Author;

    fn owned(id: &str, author: Author, views: u64, rating: f64, likes: u64) -> Recipe {
        Recipe {
            author: Some(author),
            views: Some(views),
            rating: Some(rating),
            likes_count: Some(likes),
            ..recipe(id, id)
        }
    }

    fn embedded(id: &str) -> Author {
        Author::Embedded {
            id: id.to_string(),
            username: None,
        }
    }

    fn session() -> Session {
        Session::new("tok", user("u1"))
    }

    #[test]
    fn test_empty_stats() {
        let stats = DashboardStats::new(&[]);
        assert_eq!(stats.total_recipes, 0);
        assert_eq!(stats.total_views, 0);
        assert_eq!(stats.avg_rating, "0.0");
        assert_eq!(stats.favorites, 0);
    }

    #[test]
    fn test_stats_aggregate() {
        let recipes = vec![
            owned("a", Author::Id("u1".into()), 10, 4.0, 2),
            owned("b", embedded("u1"), 5, 5.0, 1),
        ];
        let stats = DashboardStats::new(&recipes);
        assert_eq!(stats.total_recipes, 2);
        assert_eq!(stats.total_views, 15);
        assert_eq!(stats.avg_rating, "4.5");
        assert_eq!(stats.avg_rating_value(), 4.5);
        assert_eq!(stats.favorites, 3);
    }

    #[test]
    fn test_average_ties_round_up() {
        let recipes = vec![
            owned("a", embedded("u1"), 0, 4.0, 0),
            owned("b", embedded("u1"), 0, 4.5, 0),
        ];
        assert_eq!(DashboardStats::new(&recipes).avg_rating, "4.3");

        let recipes = vec![
            owned("a", embedded("u1"), 0, 3.0, 0),
            owned("b", embedded("u1"), 0, 3.5, 0),
        ];
        assert_eq!(DashboardStats::new(&recipes).avg_rating, "3.3");
        assert_eq!(one_decimal_half_up(4.24), "4.2");
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let recipes = vec![recipe("a", "A"), owned("b", embedded("u1"), 0, 5.0, 0)];
        assert_eq!(DashboardStats::new(&recipes).avg_rating, "2.5");
    }

    #[test]
    fn test_filter_accepts_both_author_shapes() {
        let all = vec![
            owned("mine-id", Author::Id("u1".into()), 1, 3.0, 0),
            owned("theirs", Author::Id("u2".into()), 1, 3.0, 0),
            owned("mine-embedded", embedded("u1"), 1, 3.0, 0),
            recipe("orphan", "orphan"),
        ];
        let mine = UserRecipes::from_all(all, "u1");
        let ids: Vec<_> = mine.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["mine-id", "mine-embedded"]);
        assert_eq!(mine.stats.total_recipes, 2);
    }

    #[tokio::test]
    async fn test_profile_falls_back_to_stored_user() {
        let api = FakeApi::new().fail_profile();
        let profile = load_profile(&api, &session()).await;
        assert_eq!(profile, user("u1"));

        let api = FakeApi::new();
        let profile = load_profile(&api, &session()).await;
        assert_eq!(profile.bio.as_deref(), Some("Loves noodles"));
    }

    #[tokio::test]
    async fn test_recipe_fetch_failure_is_empty() {
        let api = FakeApi::new().fail_recipes();
        let mine = load_user_recipes(&api, "u1").await;
        assert!(mine.recipes.is_empty());
        assert_eq!(mine.stats.avg_rating, "0.0");
    }

    #[tokio::test]
    async fn test_delete_success_reloads() {
        let api = FakeApi::new().with_recipes(vec![
            owned("a", Author::Id("u1".into()), 1, 4.0, 0),
            owned("b", Author::Id("u1".into()), 1, 5.0, 0),
        ]);

        let reloaded = delete_recipe(&api, &session(), "a").await.unwrap();

        assert_eq!(api.calls("delete"), 1);
        assert_eq!(api.calls("recipes"), 1);
        assert_eq!(reloaded.recipes.len(), 1);
        assert_eq!(reloaded.stats.avg_rating, "5.0");
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_previous_list() {
        let api = FakeApi::new()
            .with_recipes(vec![owned("a", Author::Id("u1".into()), 1, 4.0, 0)])
            .fail_delete();
        let shown = load_user_recipes(&api, "u1").await;
        let before = shown.clone();

        let result = delete_recipe(&api, &session(), "a").await;

        assert!(result.is_err());
        assert_eq!(api.calls("recipes"), 1);
        assert_eq!(shown, before);
        assert_eq!(load_user_recipes(&api, "u1").await.recipes.len(), 1);
    }
}

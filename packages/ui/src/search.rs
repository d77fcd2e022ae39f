//! Keyword ranking over the cached recipe list.
//!
//! A search term is lower-cased and split on whitespace. Each keyword scores
//! independently against each field:
//!
//! | Field | Points per keyword |
//! |-------|--------------------|
//! | title | 10 |
//! | cuisine type | 5 |
//! | ingredients (joined with spaces) | 3 |
//! | description | 1 |
//!
//! A recipe whose combined text contains every keyword gets a further 20
//! points on top. Zero-score recipes are dropped and the rest are ordered by
//! descending score, keeping fetch order among equal scores.

use api::Recipe;

pub const TITLE_POINTS: u32 = 10;
pub const CUISINE_POINTS: u32 = 5;
pub const INGREDIENT_POINTS: u32 = 3;
pub const DESCRIPTION_POINTS: u32 = 1;
pub const ALL_KEYWORDS_BONUS: u32 = 20;

/// A recipe annotated with its search score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    pub score: u32,
}

/// Lower-cased whitespace-separated keywords; empty for a blank term.
pub fn keywords(term: &str) -> Vec<String> {
    term.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score one recipe against pre-split keywords.
pub fn score(recipe: &Recipe, keywords: &[String]) -> u32 {
    let title = recipe.title.to_lowercase();
    let description = recipe.description.to_lowercase();
    let cuisine = recipe.cuisine_type.to_lowercase();
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| i.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let all_text = format!("{title} {description} {cuisine} {ingredients}");

    let mut total = 0;
    for word in keywords {
        if title.contains(word.as_str()) {
            total += TITLE_POINTS;
        }
        if cuisine.contains(word.as_str()) {
            total += CUISINE_POINTS;
        }
        if ingredients.contains(word.as_str()) {
            total += INGREDIENT_POINTS;
        }
        if description.contains(word.as_str()) {
            total += DESCRIPTION_POINTS;
        }
    }

    if keywords.iter().all(|word| all_text.contains(word.as_str())) {
        total += ALL_KEYWORDS_BONUS;
    }
    total
}

/// Rank `recipes` for `term`.
///
/// Returns `None` when the term is blank, meaning "show the unfiltered list".
pub fn rank(recipes: &[Recipe], term: &str) -> Option<Vec<ScoredRecipe>> {
    let keywords = keywords(term);
    if keywords.is_empty() {
        return None;
    }

    let mut scored: Vec<ScoredRecipe> = recipes
        .iter()
        .map(|recipe| ScoredRecipe {
            score: score(recipe, &keywords),
            recipe: recipe.clone(),
        })
        .filter(|s| s.score > 0)
        .collect();
    // `sort_by` is stable, so equal scores keep fetch order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    Some(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recipe;

    fn full(id: &str, title: &str, description: &str, cuisine: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            description: description.to_string(),
            cuisine_type: cuisine.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            ..recipe(id, title)
        }
    }

    #[test]
    fn test_blank_term_means_no_filter() {
        let recipes = vec![recipe("1", "Ramen")];
        assert!(rank(&recipes, "").is_none());
        assert!(rank(&recipes, "   \t ").is_none());
    }

    #[test]
    fn test_field_weights_stack_with_bonus() {
        let r = full("1", "Chicken Curry", "chicken in sauce", "Thai", &["Chicken thigh"]);
        // title 10 + ingredients 3 + description 1 + all-keywords 20
        assert_eq!(score(&r, &keywords("chicken")), 34);
        // "thai": cuisine 5 + bonus 20
        assert_eq!(score(&r, &keywords("THAI")), 25);
        // one keyword missing: no bonus
        assert_eq!(score(&r, &keywords("curry tofu")), 10);
        assert_eq!(score(&r, &keywords("tofu")), 0);
    }

    #[test]
    fn test_title_match_outranks_description_match() {
        let recipes = vec![
            full("desc", "Fried Rice", "goes well with chicken", "Chinese", &[]),
            full("title", "Chicken Adobo", "vinegar braise", "Filipino", &[]),
            full("none", "Pho", "beef noodle soup", "Vietnamese", &[]),
        ];

        let ranked = rank(&recipes, "chicken").unwrap();

        let ids: Vec<_> = ranked.iter().map(|s| s.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["title", "desc"]);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_equal_scores_keep_fetch_order() {
        let recipes = vec![
            recipe("a", "Miso Soup"),
            recipe("b", "Tom Yum Soup"),
            recipe("c", "Hot and Sour Soup"),
        ];
        let ranked = rank(&recipes, "soup").unwrap();
        let ids: Vec<_> = ranked.iter().map(|s| s.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keywords_can_match_across_fields() {
        let r = full("1", "Bibimbap", "rice bowl", "Korean", &["gochujang"]);
        // title 0, cuisine 5, ingredients 3, description 1 (rice) + bonus
        assert_eq!(score(&r, &keywords("korean gochujang rice")), 5 + 3 + 1 + 20);
    }
}

//! Public recipe listing with client-side search.
//!
//! [`RecipeListing`] keeps the baseline list fetched once per page and the list
//! currently shown. Searching re-ranks the baseline synchronously; the network
//! is only touched by [`fetch_baseline`].

use api::{Recipe, RecipeApi};

use crate::search;

/// Fetch the public list. Errors are logged and read as an empty list.
pub async fn fetch_baseline<A: RecipeApi>(api: &A) -> Vec<Recipe> {
    match api.recipes().await {
        Ok(recipes) => {
            tracing::debug!("Loaded {} recipes", recipes.len());
            recipes
        }
        Err(e) => {
            tracing::error!("Error loading recipes: {}", e);
            Vec::new()
        }
    }
}

/// Baseline and displayed recipes for a listing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeListing {
    baseline: Vec<Recipe>,
    shown: Vec<Recipe>,
    loaded: bool,
}

impl RecipeListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `filtered` when given; otherwise adopt `fetched` as the new baseline.
    pub fn load(&mut self, filtered: Option<Vec<Recipe>>, fetched: impl FnOnce() -> Vec<Recipe>) {
        match filtered {
            Some(list) => self.shown = list,
            None => {
                self.baseline = fetched();
                self.shown = self.baseline.clone();
                self.loaded = true;
            }
        }
    }

    /// Replace the baseline with a fresh fetch and show it.
    pub fn set_baseline(&mut self, recipes: Vec<Recipe>) {
        self.load(None, || recipes);
    }

    /// Re-rank the baseline for `term`; a blank term restores it unchanged.
    pub fn search(&mut self, term: &str) {
        let shown = match search::rank(&self.baseline, term) {
            None => self.baseline.clone(),
            Some(ranked) => ranked.into_iter().map(|s| s.recipe).collect(),
        };
        self.load(Some(shown), Vec::new);
    }

    pub fn baseline(&self) -> &[Recipe] {
        &self.baseline
    }

    pub fn shown(&self) -> &[Recipe] {
        &self.shown
    }

    /// Whether the baseline fetch has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.baseline.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recipe, FakeApi};

    fn sample() -> Vec<Recipe> {
        let mut curry = recipe("1", "Green Curry");
        curry.description = "Thai classic with chicken".to_string();
        let mut adobo = recipe("2", "Chicken Adobo");
        adobo.description = "Braised".to_string();
        vec![curry, adobo, recipe("3", "Mochi")]
    }

    #[test]
    fn test_blank_search_restores_baseline_order() {
        let mut listing = RecipeListing::new();
        listing.set_baseline(sample());

        listing.search("chicken");
        let ids: Vec<_> = listing.shown().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);

        listing.search("   ");
        assert_eq!(listing.shown(), sample().as_slice());
        assert_eq!(listing.baseline(), sample().as_slice());
    }

    #[test]
    fn test_search_with_no_match_shows_nothing() {
        let mut listing = RecipeListing::new();
        listing.set_baseline(sample());
        listing.search("sushi");
        assert!(listing.shown().is_empty());
        assert_eq!(listing.baseline().len(), 3);
    }

    #[test]
    fn test_explicit_list_does_not_replace_baseline() {
        let mut listing = RecipeListing::new();
        listing.set_baseline(sample());
        listing.load(Some(vec![recipe("9", "Other")]), Vec::new);
        assert_eq!(listing.shown().len(), 1);
        assert_eq!(listing.baseline().len(), 3);
        assert!(listing.find("3").is_some());
        assert!(listing.find("9").is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let api = FakeApi::new().fail_recipes();
        let mut listing = RecipeListing::new();
        listing.set_baseline(fetch_baseline(&api).await);
        assert!(listing.is_loaded());
        assert!(listing.shown().is_empty());
    }

    #[tokio::test]
    async fn test_search_does_not_refetch() {
        let api = FakeApi::new().with_recipes(sample());
        let mut listing = RecipeListing::new();
        listing.set_baseline(fetch_baseline(&api).await);

        listing.search("curry");
        listing.search("mochi");
        listing.search("");

        assert_eq!(api.calls("recipes"), 1);
        assert_eq!(listing.shown().len(), 3);
    }
}

use dioxus::prelude::*;

use crate::animate::{StatCounter, StatFormat};
use crate::auth::use_session;
use crate::browser;
use crate::components::{NoRecipesYet, OwnedRecipeCard};
use crate::context::use_app;
use crate::dashboard::{self, UserRecipes};
use crate::guard::PageRole;
use crate::notification::{notify, use_notifications, NoticeLevel};
use crate::render::{OwnedRecipeView, ProfileSummary};

const DELETE_PROMPT: &str = "Are you sure you want to delete this recipe?";

/// The signed-in user's home: welcome header, stats and their own recipes.
#[component]
pub fn DashboardPage(on_navigate: EventHandler<PageRole>) -> Element {
    let app = use_app();
    let session = use_session();
    let mut notifications = use_notifications();
    let mut mine = use_signal(|| Option::<UserRecipes>::None);

    let profile_app = app.clone();
    let profile = use_resource(move || {
        let app = profile_app.clone();
        let session = session();
        async move {
            match session {
                Some(session) => Some(dashboard::load_profile(&app.api, &session).await),
                None => None,
            }
        }
    });

    let recipes_app = app.clone();
    let _recipes = use_resource(move || {
        let app = recipes_app.clone();
        let user_id = session().map(|s| s.user.id);
        async move {
            if let Some(user_id) = user_id {
                mine.set(Some(dashboard::load_user_recipes(&app.api, &user_id).await));
            }
        }
    });

    let delete_app = app.clone();
    let on_delete = use_callback(move |recipe_id: String| {
        if !browser::confirm(DELETE_PROMPT) {
            return;
        }
        let Some(session) = session.peek().clone() else {
            return;
        };
        let app = delete_app.clone();
        spawn(async move {
            match dashboard::delete_recipe(&app.api, &session, &recipe_id).await {
                Ok(updated) => {
                    notify(&mut notifications, NoticeLevel::Success, "Recipe deleted successfully");
                    mine.set(Some(updated));
                }
                Err(_) => notify(&mut notifications, NoticeLevel::Error, "Failed to delete recipe"),
            }
        });
    });

    // The shell redirects signed-out visitors; render nothing meanwhile.
    let Some(session) = session() else {
        return rsx! {};
    };

    let user = profile
        .cloned()
        .flatten()
        .unwrap_or_else(|| session.user.clone());
    let summary = ProfileSummary::new(&user);
    let duration_ms = app.config.ui.counter_animation_ms;

    let grid = match mine() {
        None => rsx! { p { class: "loading", "Loading your recipes..." } },
        Some(list) if list.recipes.is_empty() => rsx! { NoRecipesYet {} },
        Some(list) => rsx! {
            div {
                id: "my-recipes-grid",
                class: "recipes-grid",
                for recipe in list.recipes.iter() {
                    OwnedRecipeCard {
                        key: "{recipe.id}",
                        recipe: OwnedRecipeView::new(recipe),
                        on_delete: on_delete,
                    }
                }
            }
        },
    };
    let stats = mine().map(|m| m.stats).unwrap_or_default();
    let avg_rating = stats.avg_rating_value();

    rsx! {
        section {
            class: "dashboard",
            div {
                class: "dashboard-header",
                img { class: "profile-avatar", src: "{summary.avatar}", alt: "{summary.username}" }
                div {
                    h1 { id: "welcome-message", "{summary.greeting}" }
                    p { id: "user-bio", "{summary.bio}" }
                }
            }

            div {
                class: "stats-grid",
                div {
                    class: "stat-card",
                    StatCounter {
                        key: "recipes-{stats.total_recipes}",
                        id: "total-recipes",
                        target: stats.total_recipes as f64,
                        format: StatFormat::Integer,
                        duration_ms,
                    }
                    span { class: "stat-label", "Recipes" }
                }
                div {
                    class: "stat-card",
                    StatCounter {
                        key: "views-{stats.total_views}",
                        id: "total-views",
                        target: stats.total_views as f64,
                        format: StatFormat::Integer,
                        duration_ms,
                    }
                    span { class: "stat-label", "Total Views" }
                }
                div {
                    class: "stat-card",
                    StatCounter {
                        key: "rating-{stats.avg_rating}",
                        id: "avg-rating",
                        target: avg_rating,
                        format: StatFormat::OneDecimal,
                        duration_ms,
                    }
                    span { class: "stat-label", "Avg Rating" }
                }
                div {
                    class: "stat-card",
                    StatCounter {
                        key: "likes-{stats.favorites}",
                        id: "total-favorites",
                        target: stats.favorites as f64,
                        format: StatFormat::Integer,
                        duration_ms,
                    }
                    span { class: "stat-label", "Favorites" }
                }
            }

            div {
                class: "section-header",
                h2 { "My Recipes" }
                a {
                    class: "btn btn-outline",
                    href: PageRole::Recipes.path(),
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_navigate.call(PageRole::Recipes);
                    },
                    "Browse all recipes"
                }
            }
            {grid}
        }
    }
}

use dioxus::prelude::*;

use crate::components::{LazyImage, PrintButton};
use crate::context::use_app;
use crate::guard::PageRole;
use crate::icons::{FaEye, FaStar};
use crate::listing::{fetch_baseline, RecipeListing};
use crate::render::RecipeDetailView;
use crate::Icon;

/// Full recipe page, resolved from the public list by id.
#[component]
pub fn RecipeDetailPage(recipe_id: String, on_navigate: EventHandler<PageRole>) -> Element {
    let app = use_app();

    // Keep the id in a signal so the resource re-runs when the route param changes
    let mut id_signal = use_signal(|| recipe_id.clone());
    if *id_signal.peek() != recipe_id {
        id_signal.set(recipe_id.clone());
    }

    let recipe = use_resource(move || {
        let app = app.clone();
        let id = id_signal();
        async move {
            let mut listing = RecipeListing::new();
            listing.set_baseline(fetch_baseline(&app.api).await);
            listing.find(&id).map(RecipeDetailView::new)
        }
    });

    let back = rsx! {
        a {
            class: "back-link",
            href: PageRole::Recipes.path(),
            onclick: move |evt| {
                evt.prevent_default();
                on_navigate.call(PageRole::Recipes);
            },
            "← Back to recipes"
        }
    };

    let content = match &*recipe.read() {
        None => rsx! { p { class: "loading", "Loading recipe..." } },
        Some(None) => rsx! {
            div {
                class: "empty-state",
                h3 { "Recipe not found" }
                p { "It may have been removed by its author." }
            }
        },
        Some(Some(view)) => {
            let view = view.clone();
            rsx! {
                article {
                    class: "recipe-detail",
                    div {
                        class: "recipe-detail-image",
                        LazyImage { src: view.image.clone(), alt: view.title.clone() }
                    }
                    span { class: "cuisine-badge {view.cuisine_class}", "{view.cuisine}" }
                    h1 { "{view.title}" }
                    if let Some(author) = view.author.clone() {
                        p { class: "recipe-author", "by {author}" }
                    }
                    div {
                        class: "recipe-meta",
                        span {
                            Icon { icon: FaEye, width: 12, height: 12 }
                            " {view.views} views"
                        }
                        span {
                            Icon { icon: FaStar, width: 12, height: 12 }
                            " {view.rating}"
                        }
                    }
                    p { class: "recipe-description", "{view.description}" }
                    h2 { "Ingredients" }
                    ul {
                        class: "ingredients",
                        for (i, item) in view.ingredients.iter().enumerate() {
                            li { key: "{i}", "{item}" }
                        }
                    }
                    PrintButton {}
                }
            }
        }
    };

    rsx! {
        section {
            class: "recipe-detail-page",
            {back}
            {content}
        }
    }
}

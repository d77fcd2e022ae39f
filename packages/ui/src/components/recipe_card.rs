use dioxus::prelude::*;

use crate::components::LazyImage;
use crate::icons::{FaEye, FaStar, FaTrash};
use crate::render::{reveal_class, OwnedRecipeView, RecipeCardView};
use crate::visibility::use_visibility;
use crate::Icon;

/// Card on the public listing. `on_open` receives the recipe id.
#[component]
pub fn RecipeCard(card: RecipeCardView, on_open: EventHandler<String>) -> Element {
    let id = card.id.clone();
    let reveal = use_visibility();

    rsx! {
        div {
            class: reveal_class("recipe-card", reveal.visible()),
            onmounted: move |evt| reveal.observe(evt),
            div {
                class: "recipe-image",
                LazyImage { src: card.image.clone(), alt: card.title.clone() }
                span { class: "cuisine-badge {card.cuisine_class}", "{card.cuisine}" }
            }
            div {
                class: "recipe-content",
                h3 { "{card.title}" }
                p { "{card.preview}" }
                a {
                    class: "btn btn-primary",
                    href: "/recipes/{card.id}",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_open.call(id.clone());
                    },
                    "View Recipe"
                }
            }
        }
    }
}

/// Card on the dashboard with the owner's delete action.
#[component]
pub fn OwnedRecipeCard(recipe: OwnedRecipeView, on_delete: EventHandler<String>) -> Element {
    let id = recipe.id.clone();
    let reveal = use_visibility();

    rsx! {
        div {
            class: reveal_class("recipe-card", reveal.visible()),
            onmounted: move |evt| reveal.observe(evt),
            div {
                class: "recipe-image",
                LazyImage { src: recipe.image.clone(), alt: recipe.title.clone() }
                span { class: "cuisine-badge {recipe.cuisine_class}", "{recipe.cuisine}" }
                span { class: "status-badge published", "Published" }
            }
            div {
                class: "recipe-content",
                h3 { "{recipe.title}" }
                div {
                    class: "recipe-meta",
                    span {
                        Icon { icon: FaEye, width: 12, height: 12 }
                        " {recipe.views}"
                    }
                    span {
                        Icon { icon: FaStar, width: 12, height: 12 }
                        " {recipe.rating}"
                    }
                }
                div {
                    class: "recipe-actions",
                    button {
                        class: "btn btn-danger btn-sm",
                        onclick: move |_| on_delete.call(id.clone()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                        " Delete"
                    }
                }
            }
        }
    }
}

/// Public listing with nothing to show.
#[component]
pub fn EmptyListing(on_register: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "No recipes shared yet" }
            p { "Be the first to share a recipe with the community!" }
            a {
                class: "btn btn-primary",
                href: "/register",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_register.call(());
                },
                "Join and Share"
            }
        }
    }
}

/// Dashboard grid for a user without recipes.
#[component]
pub fn NoRecipesYet() -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "No Recipes Yet" }
            p { "Recipes you share will show up here." }
        }
    }
}

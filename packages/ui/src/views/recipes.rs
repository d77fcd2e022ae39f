use dioxus::prelude::*;

use crate::components::{EmptyListing, RecipeCard};
use crate::context::use_app;
use crate::guard::PageRole;
use crate::icons::FaMagnifyingGlass;
use crate::listing::{fetch_baseline, RecipeListing};
use crate::render::ListingView;
use crate::Icon;

/// Public recipe grid with keyword search.
///
/// The list is fetched once; every keystroke re-ranks that baseline locally.
/// `show_hero` adds the landing-page banner above the search box.
#[component]
pub fn RecipesPage(
    on_navigate: EventHandler<PageRole>,
    on_open_recipe: EventHandler<String>,
    #[props(default)] show_hero: bool,
) -> Element {
    let app = use_app();
    let preview_chars = app.config.ui.description_preview_chars;
    let mut listing = use_signal(RecipeListing::new);
    let mut term = use_signal(String::new);

    let _loader = use_resource(move || {
        let app = app.clone();
        async move {
            let recipes = fetch_baseline(&app.api).await;
            let pending = term.peek().clone();
            let mut listing = listing.write();
            listing.set_baseline(recipes);
            if !pending.trim().is_empty() {
                listing.search(&pending);
            }
        }
    });

    let body = if !listing.read().is_loaded() {
        rsx! { p { class: "loading", "Loading recipes..." } }
    } else {
        match ListingView::new(listing.read().shown(), preview_chars) {
            ListingView::Empty => rsx! {
                EmptyListing { on_register: move |_| on_navigate.call(PageRole::Register) }
            },
            ListingView::Cards(cards) => rsx! {
                div {
                    id: "recipes-grid",
                    class: "recipes-grid",
                    for card in cards {
                        RecipeCard {
                            key: "{card.id}",
                            card: card.clone(),
                            on_open: on_open_recipe,
                        }
                    }
                }
            },
        }
    };

    rsx! {
        if show_hero {
            section {
                class: "hero",
                h1 { "Discover Asian Recipes" }
                p { "Home-cooked dishes shared by the community." }
            }
        }

        section {
            class: "recipes-section",
            div {
                class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    id: "search-input",
                    r#type: "search",
                    placeholder: "Search by title, cuisine or ingredient...",
                    value: "{term}",
                    oninput: move |evt| {
                        let value = evt.value();
                        listing.write().search(&value);
                        term.set(value);
                    },
                }
            }
            {body}
        }
    }
}

use dioxus::prelude::*;
use ui::PageRole;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RecipesPage {
            show_hero: true,
            on_navigate: move |role: PageRole| {
                nav.push(Route::from(role));
            },
            on_open_recipe: move |id: String| {
                nav.push(Route::RecipeDetail { id });
            },
        }
    }
}

#[component]
pub fn Recipes() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RecipesPage {
            on_navigate: move |role: PageRole| {
                nav.push(Route::from(role));
            },
            on_open_recipe: move |id: String| {
                nav.push(Route::RecipeDetail { id });
            },
        }
    }
}

use dioxus::prelude::*;
use ui::PageRole;

use crate::Route;

#[component]
pub fn RecipeDetail(id: String) -> Element {
    let nav = use_navigator();

    let navigate = move |role: PageRole| {
        nav.push(Route::from(role));
    };

    rsx! {
        ui::views::RecipeDetailPage {
            recipe_id: id,
            on_navigate: navigate,
        }
    }
}

//! Guest-only pages. Success navigation replaces the form in history.

use dioxus::prelude::*;
use ui::PageRole;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LoginPage {
            on_navigate: move |role: PageRole| {
                nav.replace(Route::from(role));
            },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RegisterPage {
            on_navigate: move |role: PageRole| {
                nav.replace(Route::from(role));
            },
        }
    }
}

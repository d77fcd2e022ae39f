use dioxus::prelude::*;
use ui::PageRole;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::DashboardPage {
            on_navigate: move |role: PageRole| {
                nav.push(Route::from(role));
            },
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::ProfilePage {
            on_navigate: move |role: PageRole| {
                nav.push(Route::from(role));
            },
        }
    }
}

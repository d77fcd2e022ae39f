use dioxus::prelude::*;
use ui::PageRole;

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let current = use_route::<Route>().role();

    let navigate = move |role: PageRole| {
        nav.push(Route::from(role));
    };

    let redirect = move |role: PageRole| {
        nav.replace(Route::from(role));
    };

    rsx! {
        ui::views::PageShell {
            current,
            on_navigate: navigate,
            on_redirect: redirect,
            Outlet::<Route> {}
        }
    }
}

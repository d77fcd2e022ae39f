use dioxus::prelude::*;

use ui::PageRole;
use views::{AppLayout, Dashboard, Home, Login, Profile, RecipeDetail, Recipes, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/recipes")]
        Recipes {},
        #[route("/recipes/:id")]
        RecipeDetail { id: String },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
}

impl Route {
    fn role(&self) -> PageRole {
        match self {
            Route::Home {} => PageRole::Home,
            Route::Recipes {} => PageRole::Recipes,
            Route::RecipeDetail { .. } => PageRole::RecipeDetail,
            Route::Login {} => PageRole::Login,
            Route::Register {} => PageRole::Register,
            Route::Dashboard {} => PageRole::Dashboard,
            Route::Profile {} => PageRole::Profile,
        }
    }
}

impl From<PageRole> for Route {
    fn from(role: PageRole) -> Self {
        match role {
            PageRole::Home => Route::Home {},
            // Detail pages need an id; the listing is the nearest page.
            PageRole::Recipes | PageRole::RecipeDetail => Route::Recipes {},
            PageRole::Login => Route::Login {},
            PageRole::Register => Route::Register {},
            PageRole::Dashboard => Route::Dashboard {},
            PageRole::Profile => Route::Profile {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting RecipeBox");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}

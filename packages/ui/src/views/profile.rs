use dioxus::prelude::*;

use crate::auth::use_session;
use crate::context::use_app;
use crate::dashboard::load_profile;
use crate::guard::PageRole;
use crate::render::ProfileSummary;

#[component]
pub fn ProfilePage(on_navigate: EventHandler<PageRole>) -> Element {
    let app = use_app();
    let session = use_session();

    let profile = use_resource(move || {
        let app = app.clone();
        let session = session();
        async move {
            match session {
                Some(session) => Some(load_profile(&app.api, &session).await),
                None => None,
            }
        }
    });

    let Some(session) = session() else {
        return rsx! {};
    };
    let user = profile
        .cloned()
        .flatten()
        .unwrap_or_else(|| session.user.clone());
    let summary = ProfileSummary::new(&user);

    rsx! {
        section {
            class: "profile-page",
            div {
                class: "profile-card",
                img { class: "profile-avatar large", src: "{summary.avatar}", alt: "{summary.username}" }
                h1 { "{summary.username}" }
                span { class: "role-tag {summary.role}", "{summary.role}" }
                p { class: "profile-bio", "{summary.bio}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_navigate.call(PageRole::Dashboard),
                    "Go to Dashboard"
                }
            }
        }
    }
}

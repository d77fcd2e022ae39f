use std::time::Duration;

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{BackToTop, Navbar};
use crate::context::use_app;
use crate::guard::PageRole;
use crate::timer::sleep;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Navbar, guarded content and footer around every routed page.
///
/// When the guard says `current` may not be shown, `on_redirect` is called
/// with the replacement page and nothing is rendered in its place. A redirect
/// hold set at sign-in is released here after its delay.
#[component]
pub fn PageShell(
    current: PageRole,
    on_navigate: EventHandler<PageRole>,
    on_redirect: EventHandler<PageRole>,
    children: Element,
) -> Element {
    let mut auth = use_auth();
    let threshold_px = use_app().config.ui.back_to_top_threshold_px;
    let redirect = auth().redirect_for(current);

    // Lives with the layout, so leaving the page early still releases it.
    let hold = use_memo(move || auth().redirect_hold_ms);
    let _release = use_resource(move || {
        let hold = hold();
        async move {
            let Some(ms) = hold else {
                return;
            };
            sleep(Duration::from_millis(ms)).await;
            auth.write().release_hold();
        }
    });

    use_effect(use_reactive!(|current| {
        if let Some(target) = auth().redirect_for(current) {
            tracing::debug!("Guard: {:?} -> {:?}", current, target);
            on_redirect.call(target);
        }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        Navbar { current, on_navigate }

        main {
            class: "page",
            if redirect.is_none() {
                {children}
            }
        }

        footer {
            class: "footer",
            p { "Share and discover Asian recipes." }
        }

        BackToTop { threshold_px }
    }
}

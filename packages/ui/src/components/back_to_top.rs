use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser;
use crate::icons::FaArrowUp;
use crate::Icon;

/// Floating button that appears once the page is scrolled past
/// `threshold_px` and smooth-scrolls back to the top.
#[component]
pub fn BackToTop(#[props(default = 300.0)] threshold_px: f64) -> Element {
    let mut visible = use_signal(|| false);

    // Kept for the component's lifetime; dropping it removes the listener.
    let _scroll = use_hook(move || {
        Rc::new(browser::on_window_scroll(move |offset| {
            let show = offset > threshold_px;
            if visible.try_peek().is_ok_and(|v| *v != show) {
                visible.set(show);
            }
        }))
    });

    rsx! {
        button {
            id: "back-to-top",
            class: if visible() { "back-to-top show" } else { "back-to-top" },
            aria_label: "Back to top",
            onclick: move |_| browser::scroll_to_top(),
            Icon { icon: FaArrowUp, width: 16, height: 16 }
        }
    }
}

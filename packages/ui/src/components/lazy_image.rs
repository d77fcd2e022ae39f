use dioxus::prelude::*;

use crate::render::FALLBACK_IMAGE;
use crate::visibility::use_visibility;

/// An image whose `src` is only set once it scrolls into view.
///
/// A broken source is swapped for the stock fallback image.
#[component]
pub fn LazyImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
) -> Element {
    let visibility = use_visibility();
    let mut failed = use_signal(|| false);

    let (img_class, current) = match (visibility.visible(), failed()) {
        (false, _) => (format!("{class} lazy"), String::new()),
        (true, false) => (format!("{class} loaded"), src.clone()),
        (true, true) => (format!("{class} loaded"), FALLBACK_IMAGE.to_string()),
    };

    rsx! {
        img {
            class: "{img_class}",
            alt: "{alt}",
            src: "{current}",
            "data-src": "{src}",
            onmounted: move |evt| visibility.observe(evt),
            onerror: move |_| {
                if !failed() {
                    failed.set(true);
                }
            },
        }
    }
}

use dioxus::prelude::*;

use crate::browser;
use crate::icons::FaPrint;
use crate::Icon;

#[component]
pub fn PrintButton(#[props(default = "Print Recipe".to_string())] label: String) -> Element {
    rsx! {
        button {
            class: "btn btn-outline print-btn",
            onclick: move |_| browser::print(),
            Icon { icon: FaPrint, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

use std::time::Duration;

use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::context::use_app;
use crate::guard::{PageRole, NAV_LINKS};
use crate::icons::{FaBars, FaUtensils, FaXmark};
use crate::render::avatar_url;
use crate::timer::sleep;
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Open/closed state of the mobile link list and the user dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MenuState {
    links_open: bool,
    dropdown_open: bool,
}

impl MenuState {
    fn toggle_links(&mut self) {
        self.links_open = !self.links_open;
    }

    fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Clicking anywhere outside the menus, or following a link, closes both.
    fn close(&mut self) {
        *self = Self::default();
    }

    fn any_open(&self) -> bool {
        self.links_open || self.dropdown_open
    }
}

/// Site navigation bar.
///
/// `current` marks the active link; `on_navigate` is called for every link
/// so the platform crate can map it onto its router.
#[component]
pub fn Navbar(current: PageRole, on_navigate: EventHandler<PageRole>) -> Element {
    let auth = use_auth();
    let logout_delay = Duration::from_millis(use_app().config.ui.logout_redirect_ms);
    let mut menu = use_signal(MenuState::default);

    let mut go = move |role: PageRole| {
        menu.write().close();
        on_navigate.call(role);
    };

    let user = auth().user().cloned();
    let state = menu();
    let toggle_icon = if state.links_open {
        rsx! { Icon { icon: FaXmark, width: 20, height: 20 } }
    } else {
        rsx! { Icon { icon: FaBars, width: 20, height: 20 } }
    };
    let links_class = if state.links_open { "nav-links active" } else { "nav-links" };

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        if state.any_open() {
            // Catches clicks outside the open menus.
            div {
                class: "nav-backdrop",
                onclick: move |_| menu.write().close(),
            }
        }

        nav {
            class: "navbar",
            a {
                class: "nav-brand",
                href: PageRole::Home.path(),
                onclick: move |evt| {
                    evt.prevent_default();
                    go(PageRole::Home);
                },
                Icon { icon: FaUtensils, width: 20, height: 20 }
                span { "RecipeBox" }
            }

            button {
                class: "mobile-menu-toggle",
                aria_label: "Toggle navigation",
                onclick: move |_| menu.write().toggle_links(),
                {toggle_icon}
            }

            ul {
                class: "{links_class}",
                for role in NAV_LINKS {
                    li {
                        key: "{role.path()}",
                        a {
                            class: if role.is_active_on(current) { "nav-link active" } else { "nav-link" },
                            href: role.path(),
                            onclick: move |evt| {
                                evt.prevent_default();
                                go(role);
                            },
                            "{role.label()}"
                        }
                    }
                }

                if let Some(user) = user {
                    li {
                        class: "user-menu",
                        button {
                            class: "user-menu-btn",
                            onclick: move |_| menu.write().toggle_dropdown(),
                            img {
                                class: "user-avatar",
                                src: avatar_url(&user),
                                alt: "{user.display_name()}",
                            }
                            span { class: "user-name", "{user.display_name()}" }
                            if user.is_admin() {
                                span { class: "role-tag admin", "Admin" }
                            }
                        }
                        if state.dropdown_open {
                            div {
                                class: "user-dropdown show",
                                a {
                                    class: "dropdown-item",
                                    href: PageRole::Profile.path(),
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        go(PageRole::Profile);
                                    },
                                    "Profile"
                                }
                                LogoutButton {
                                    class: "dropdown-item",
                                    on_logged_out: move |_| {
                                        menu.write().close();
                                        spawn(async move {
                                            sleep(logout_delay).await;
                                            on_navigate.call(PageRole::Home);
                                        });
                                    },
                                }
                            }
                        }
                    }
                } else {
                    for role in [PageRole::Login, PageRole::Register] {
                        li {
                            key: "{role.path()}",
                            a {
                                class: if role.is_active_on(current) { "nav-link active" } else { "nav-link" },
                                href: role.path(),
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    go(role);
                                },
                                "{role.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_click_closes_open_mobile_menu() {
        let mut menu = MenuState::default();
        assert!(!menu.any_open());

        menu.toggle_links();
        assert!(menu.any_open());

        menu.close();
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn test_close_shuts_links_and_dropdown_together() {
        let mut menu = MenuState::default();
        menu.toggle_links();
        menu.toggle_dropdown();
        assert!(menu.links_open && menu.dropdown_open);

        menu.close();
        assert!(!menu.any_open());
    }
}

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo};
use crate::timer::sleep;
use crate::Icon;

const NOTIFICATION_CSS: Asset = asset!("/assets/styling/notification.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    /// Stays until replaced or dismissed instead of hiding on a timer.
    pub persistent: bool,
}

/// The single toast slot. A new notice replaces the one showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    pub current: Option<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, persistent: bool) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice {
            id: self.next_id,
            level,
            message: message.into(),
            persistent,
        });
        self.next_id
    }

    /// Hide notice `id` if it is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    /// Hide the current notice if it is an error.
    pub fn clear_error(&mut self) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.level == NoticeLevel::Error)
        {
            self.current = None;
        }
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    notifications.write().push(level, message, false);
}

pub fn notify_persistent(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    notifications.write().push(level, message, true);
}

/// Renders the current notice and hides it after `hide_after_ms`.
#[component]
pub fn NotificationHost(#[props(default = 3000)] hide_after_ms: u64) -> Element {
    let mut notifications = use_notifications();

    let _hide = use_resource(move || async move {
        let Some(notice) = notifications.read().current.clone() else {
            return;
        };
        if notice.persistent {
            return;
        }
        sleep(Duration::from_millis(hide_after_ms)).await;
        notifications.write().dismiss(notice.id);
    });

    let Some(notice) = notifications().current else {
        return rsx! {};
    };
    let class = format!("notification {} show", notice.level.class());
    let id = notice.id;
    let icon = match notice.level {
        NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        NoticeLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        NoticeLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
    };

    rsx! {
        document::Stylesheet { href: NOTIFICATION_CSS }

        div {
            id: "notification",
            class: "{class}",
            onclick: move |_| notifications.write().dismiss(id),
            {icon}
            span { "{notice.message}" }
        }
    }
}

//! Thin wrappers over browser APIs used by the page affordances.
//!
//! On native builds these degrade to no-ops (or "yes" for [`confirm`]) so the
//! components still render under `dx serve` desktop previews and in tests.

/// Ask the user to confirm an action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("confirm (auto-accepted): {}", message);
        true
    }
}

/// Open the browser print dialog.
pub fn print() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            tracing::warn!("Print failed: {:?}", e);
        }
    }
}

/// Smooth-scroll the window to the top.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// A window scroll listener; removed when dropped.
pub struct ScrollWatch {
    #[cfg(target_arch = "wasm32")]
    listener: Option<(web_sys::Window, wasm_bindgen::closure::Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollWatch {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some((window, closure)) = self.listener.take() {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }
}

/// Call `on_scroll` with the vertical scroll offset whenever the window scrolls.
///
/// The listener stays registered for as long as the returned watch is kept.
pub fn on_window_scroll(on_scroll: impl FnMut(f64) + 'static) -> ScrollWatch {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return ScrollWatch { listener: None };
        };
        let mut on_scroll = on_scroll;
        let handler_window = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let offset = handler_window.scroll_y().unwrap_or(0.0);
            on_scroll(offset);
        });
        if let Err(e) =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Could not listen for scroll: {:?}", e);
            return ScrollWatch { listener: None };
        }
        ScrollWatch {
            listener: Some((window, closure)),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(on_scroll);
        ScrollWatch {}
    }
}

/// An IntersectionObserver and its callback; disconnected when dropped.
#[cfg(target_arch = "wasm32")]
pub struct VisibilityWatch {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >,
}

#[cfg(target_arch = "wasm32")]
impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run `on_visible` once, the first time `element` intersects the viewport.
///
/// Without IntersectionObserver support `on_visible` runs immediately and no
/// watch is returned.
#[cfg(target_arch = "wasm32")]
pub fn observe_visible(
    element: &web_sys::Element,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityWatch> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let pending = Rc::new(RefCell::new(Some(on_visible)));
    let fire = {
        let pending = pending.clone();
        move || {
            if let Some(f) = pending.borrow_mut().take() {
                f();
            }
        }
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                fire();
            }
        },
    );
    match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            Some(VisibilityWatch {
                observer,
                _callback: callback,
            })
        }
        Err(e) => {
            tracing::warn!("IntersectionObserver unavailable: {:?}", e);
            if let Some(f) = pending.borrow_mut().take() {
                f();
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_scroll_handler_released_with_watch() {
        let held = Rc::new(());
        let captured = held.clone();
        let watch = on_window_scroll(move |_| {
            let _ = &captured;
        });
        drop(watch);
        assert_eq!(Rc::strong_count(&held), 1);
    }
}

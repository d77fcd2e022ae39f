//! First-time viewport visibility for mounted elements.

use dioxus::prelude::*;

/// Whether an element has scrolled into view yet.
///
/// Call [`Visibility::observe`] from the element's `onmounted`. The observer is
/// owned by the component and disconnected when it unmounts. Native renders
/// have no observer and start out visible.
#[derive(Clone, Copy)]
pub struct Visibility {
    visible: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    watch: Signal<Option<crate::browser::VisibilityWatch>>,
}

pub fn use_visibility() -> Visibility {
    Visibility {
        visible: use_signal(|| cfg!(not(target_arch = "wasm32"))),
        #[cfg(target_arch = "wasm32")]
        watch: use_signal(|| None),
    }
}

impl Visibility {
    pub fn visible(&self) -> bool {
        (self.visible)()
    }

    pub fn observe(&self, evt: Event<MountedData>) {
        #[cfg(target_arch = "wasm32")]
        if let Some(element) = evt.data().downcast::<web_sys::Element>() {
            let mut visible = self.visible;
            let handle = crate::browser::observe_visible(element, move || {
                if let Ok(mut v) = visible.try_write() {
                    *v = true;
                }
            });
            let mut watch = self.watch;
            watch.set(handle);
        }
        #[cfg(not(target_arch = "wasm32"))]
        drop(evt);
    }
}

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use wasm_bindgen::JsCast;

/// Open/closed state of a popup menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A pointer press landed inside or outside the menu. Returns true if it closed.
    pub fn press(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.open = false;
            return true;
        }
        false
    }
}

/// Close `state` on a mousedown outside `container`.
///
/// The window listener only exists while the menu is open.
pub fn use_click_outside(state: RwSignal<Disclosure>, container: NodeRef<html::Div>) {
    let handle: StoredValue<Option<WindowListenerHandle>> = StoredValue::new(None);

    let detach = move || {
        if let Some(h) = handle.try_update_value(|h| h.take()).flatten() {
            h.remove();
        }
    };

    Effect::new(move |_| {
        if !state.get().is_open() {
            detach();
            return;
        }
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let listener = window_event_listener(ev::mousedown, move |ev: web_sys::MouseEvent| {
            let inside = match (
                container.get_untracked(),
                ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()),
            ) {
                (Some(el), Some(target)) => el.contains(Some(&target)),
                _ => false,
            };
            let mut next = state.get_untracked();
            if next.press(inside) {
                state.set(next);
            }
        });
        handle.set_value(Some(listener));
    });

    on_cleanup(detach);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_transitions() {
        let mut d = Disclosure::default();
        assert!(!d.is_open());

        // Presses while closed do nothing.
        assert!(!d.press(false));

        d.toggle();
        assert!(d.is_open());
        assert!(!d.press(true));
        assert!(d.is_open());
        assert!(d.press(false));
        assert!(!d.is_open());

        d.toggle();
        d.close();
        assert!(!d.is_open());
    }
}

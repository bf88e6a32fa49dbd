//! Keyboard adapter: bridges key events on a surface to movement commands.

use std::cell::RefCell;
use std::rc::Rc;

use crate::map::map_key;
use crate::port::{InputPort, MovementCallback};
use crate::surface::{InputSurface, ListenerId};

/// Concrete [`InputPort`] bound to key and click events on one surface.
///
/// The adapter holds a shared, non-owning handle to its surface; it attaches
/// and detaches its own listeners and never touches anyone else's. The whole
/// subsystem is confined to a single event-dispatch thread, which `Rc` makes
/// explicit in the types.
///
/// Lifecycle: `Idle -> Active -> Idle`, reusable. Each setup builds a fresh
/// handler closure and records the listener tokens needed for exact removal.
pub struct KeyboardInputAdapter<S: InputSurface> {
    surface: Rc<RefCell<S>>,
    key_listener: Option<ListenerId>,
    click_listener: Option<ListenerId>,
}

impl<S: InputSurface> KeyboardInputAdapter<S> {
    pub fn new(surface: Rc<RefCell<S>>) -> Self {
        Self {
            surface,
            key_listener: None,
            click_listener: None,
        }
    }

    /// Whether the adapter currently has listeners attached.
    pub fn is_active(&self) -> bool {
        self.key_listener.is_some()
    }
}

impl<S: InputSurface> InputPort for KeyboardInputAdapter<S> {
    fn setup_input_handling(&mut self, mut on_movement: MovementCallback) {
        // Re-setup replaces the prior registration; detach it first so the
        // old key listener cannot leak.
        self.cleanup();

        let mut surface = self.surface.borrow_mut();

        // One handler per registration. Recognized keys are consumed and
        // forwarded synchronously; everything else falls through untouched.
        self.key_listener = Some(surface.add_key_listener(Box::new(move |_surface, event| {
            if let Some(direction) = map_key(event.code()) {
                event.prevent_default();
                on_movement(direction);
            }
        })));

        // Clicking the surface reclaims focus so key events keep targeting
        // it after pointer interaction.
        self.click_listener =
            Some(surface.add_click_listener(Box::new(|surface| surface.focus())));

        log::debug!("keyboard input handling registered");
    }

    fn cleanup(&mut self) {
        if self.key_listener.is_none() && self.click_listener.is_none() {
            return;
        }

        let mut surface = self.surface.borrow_mut();
        if let Some(id) = self.key_listener.take() {
            surface.remove_key_listener(id);
        }
        if let Some(id) = self.click_listener.take() {
            surface.remove_click_listener(id);
        }

        log::debug!("keyboard input handling released");
    }
}

//! Concrete `InputSurface` over crossterm events.

use crossterm::event::{Event, KeyEventKind, MouseEventKind};

use tui_gridwalk_input::{ClickHandler, InputSurface, KeyHandler, KeyPress, ListenerId};

/// The terminal as an interactive surface.
///
/// Owns the listener registrations and translates raw crossterm events into
/// dispatches. Dispatch is synchronous and run-to-completion inside the
/// caller's event turn; listeners must not be added or removed from inside a
/// handler invocation.
///
/// A terminal has no window-system focus model, so `focus()` only records
/// that the surface reclaimed focus; the flag feeds the status line.
#[derive(Default)]
pub struct TerminalSurface {
    next_id: u64,
    key_handlers: Vec<(ListenerId, KeyHandler)>,
    click_handlers: Vec<(ListenerId, ClickHandler)>,
    focused: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Feed one crossterm event through the surface.
    ///
    /// Key presses dispatch to key listeners; mouse button-down dispatches to
    /// click listeners. Repeats and releases are ignored (one event, one
    /// dispatch). Returns the key event back to the caller when its default
    /// was not prevented, so surface-level defaults (like quit keys) apply
    /// only to unconsumed input.
    pub fn pump(&mut self, event: &Event) -> Option<crossterm::event::KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let mut press = KeyPress::new(key.code);
                self.dispatch_key(&mut press);
                if press.default_prevented() {
                    None
                } else {
                    Some(*key)
                }
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.dispatch_click();
                None
            }
            Event::FocusGained => {
                self.focused = true;
                None
            }
            Event::FocusLost => {
                self.focused = false;
                None
            }
            _ => None,
        }
    }

    fn dispatch_key(&mut self, event: &mut KeyPress) {
        // Handlers get `&mut dyn InputSurface`, so take the vec out for the
        // duration of the pass.
        let mut handlers = std::mem::take(&mut self.key_handlers);
        for (_, handler) in handlers.iter_mut() {
            handler(self, event);
        }
        self.key_handlers = handlers;
    }

    fn dispatch_click(&mut self) {
        let mut handlers = std::mem::take(&mut self.click_handlers);
        for (_, handler) in handlers.iter_mut() {
            handler(self);
        }
        self.click_handlers = handlers;
    }

    fn next_listener_id(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId::new(self.next_id)
    }
}

impl InputSurface for TerminalSurface {
    fn add_key_listener(&mut self, handler: KeyHandler) -> ListenerId {
        let id = self.next_listener_id();
        self.key_handlers.push((id, handler));
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) -> bool {
        let before = self.key_handlers.len();
        self.key_handlers.retain(|(lid, _)| *lid != id);
        self.key_handlers.len() != before
    }

    fn add_click_listener(&mut self, handler: ClickHandler) -> ListenerId {
        let id = self.next_listener_id();
        self.click_handlers.push((id, handler));
        id
    }

    fn remove_click_listener(&mut self, id: ListenerId) -> bool {
        let before = self.click_handlers.len();
        self.click_handlers.retain(|(lid, _)| *lid != id);
        self.click_handlers.len() != before
    }

    fn focus(&mut self) {
        self.focused = true;
        log::trace!("surface focus reclaimed");
    }
}

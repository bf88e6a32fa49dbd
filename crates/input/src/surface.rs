//! The injected event surface an input adapter attaches to.
//!
//! [`InputSurface`] is the minimum contract an interactive surface must
//! offer: listener registration/removal and a focus request. Keeping it a
//! trait lets adapters run against a real terminal surface or a test double
//! interchangeably; nothing in this crate knows where events come from.

use crossterm::event::KeyCode;

/// Token returned by listener registration.
///
/// Removal is by token, which guarantees teardown targets exactly the
/// handler that was added. Tokens are unique per surface and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A key-press event as delivered to key listeners.
///
/// Carries the key code and a "default prevented" flag. A handler that
/// consumes the key calls [`KeyPress::prevent_default`]; the surface driver
/// applies its surface-level default behavior only to unprevented keys.
#[derive(Debug)]
pub struct KeyPress {
    code: KeyCode,
    default_prevented: bool,
}

impl KeyPress {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            default_prevented: false,
        }
    }

    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// Mark the event as consumed, suppressing surface-level default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handler invoked once per key-press event on the surface.
pub type KeyHandler = Box<dyn FnMut(&mut dyn InputSurface, &mut KeyPress)>;

/// Handler invoked once per pointer-activation (click) event on the surface.
pub type ClickHandler = Box<dyn FnMut(&mut dyn InputSurface)>;

/// An interactive surface that emits key and click events.
///
/// The surface is a shared resource: adapters only add and remove their own
/// listeners and must never assume exclusive ownership, since other listeners
/// may coexist on the same surface.
///
/// Dispatch is single-threaded and run-to-completion: one event, one pass
/// over the registered handlers, in registration order. Handlers receive the
/// surface by `&mut dyn` so they can request focus during dispatch; they must
/// not add or remove listeners from inside a handler invocation.
pub trait InputSurface {
    /// Register a key-press listener. Returns the token needed to remove it.
    fn add_key_listener(&mut self, handler: KeyHandler) -> ListenerId;

    /// Remove a previously registered key listener.
    ///
    /// Returns `false` if the token does not match a live registration.
    fn remove_key_listener(&mut self, id: ListenerId) -> bool;

    /// Register a click listener. Returns the token needed to remove it.
    fn add_click_listener(&mut self, handler: ClickHandler) -> ListenerId;

    /// Remove a previously registered click listener.
    fn remove_click_listener(&mut self, id: ListenerId) -> bool;

    /// Request input focus for this surface.
    ///
    /// Key events are only delivered to the focused surface, so adapters
    /// reclaim focus after pointer interaction.
    fn focus(&mut self);
}

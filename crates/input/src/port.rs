//! The abstract input capability the application depends on.

use crate::types::Direction;

/// Callback receiving one movement command per recognized input event.
///
/// Fire-and-forget: the adapter ignores anything the callback does beyond
/// returning.
pub type MovementCallback = Box<dyn FnMut(Direction)>;

/// A source of movement commands.
///
/// The application is written against this trait, not against any concrete
/// device. Every adapter must satisfy both operations; the compiler enforces
/// completeness, so there is no runtime "not implemented" path.
pub trait InputPort {
    /// Start forwarding recognized input events to `on_movement`.
    ///
    /// After this returns the adapter is registered: it will invoke
    /// `on_movement` zero or more times, once per recognized event, until
    /// [`InputPort::cleanup`] is called. Calling this again replaces the
    /// prior registration (the old listeners are detached first, never
    /// leaked).
    fn setup_input_handling(&mut self, on_movement: MovementCallback);

    /// Stop forwarding events and release all listeners.
    ///
    /// After this returns no previously supplied callback will be invoked
    /// again by this adapter. Safe to call when never registered, and safe
    /// to call repeatedly.
    fn cleanup(&mut self);
}

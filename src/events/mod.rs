//! Event handling for the application.
//!
//! Terminal input is polled and converted into application events which the
//! main loop feeds to `App::update`.

mod handler;
mod keys;

pub use handler::EventHandler;
pub use keys::{get_context_hints, KeyContext};

use crossterm::event::KeyEvent;

/// An application-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Periodic tick when no input arrived.
    Tick,
    /// The application was asked to quit.
    Quit,
}

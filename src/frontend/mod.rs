//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the TUI frontend implements.
//! It provides a unified interface for event polling, rendering, and
//! cleanup, keeping the page logic free of terminal concerns (and
//! letting tests drive the app without a real terminal).

pub mod events;
pub mod tui;

use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait separating rendering concerns from page logic
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, mouse, resize, paste)
    /// converted to the frontend-agnostic `FrontendEvent` enum.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Called once per frame. Takes `dyn Any` so the trait does not
    /// depend on the concrete application type; the frontend downcasts
    /// to what it knows how to draw.
    fn render(&mut self, app: &mut dyn std::any::Any) -> Result<()>;

    /// Restore the terminal before the application exits
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in character cells
    fn size(&self) -> (u16, u16);
}

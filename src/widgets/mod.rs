//! Widget state structs (rendering-agnostic)
//!
//! This module contains state-only structures for the page's interactive
//! widgets. These structs hold data and provide methods for state
//! manipulation, but contain no rendering logic, so the TUI frontend and
//! the tests drive them the exact same way. Each widget owns its own
//! state; nothing here mutates across widget boundaries.

pub mod carousel;
pub mod fade;
pub mod form;
pub mod music;
pub mod scroll;
pub mod tabs;
pub mod typewriter;

pub use carousel::CarouselState;
pub use fade::{FadePhase, FadeState};
pub use form::SubmitOutcome;
pub use music::MusicToggleState;
pub use scroll::ScrollState;
pub use tabs::TabsState;
pub use typewriter::TypewriterState;

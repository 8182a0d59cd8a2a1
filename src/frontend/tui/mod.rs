//! TUI frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for terminal rendering,
//! wrapping crossterm for event handling and terminal management.

pub mod app;

pub use app::TuiFrontend;

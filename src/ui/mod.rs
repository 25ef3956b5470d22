//! UI module for the toast demo
//!
//! This module holds the ratatui toast widget, the demo application state,
//! key handling and the terminal render loop.

pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use events::handle_key;
pub use layout::LayoutManager;
pub use renderer::run_app;

//! Demo application
//!
//! A toolbar of buttons, each with a tooltip. Mouse movement and keyboard
//! focus feed trigger events into one shared coordinator, and the event loop
//! in `main` drives its timeline from the wall clock.

mod app_events;
mod app_render;
mod app_state;
mod mouse_hover;

pub use app_state::{App, BUTTONS, ToolbarButton};
pub use mouse_hover::button_at;

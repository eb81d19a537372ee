//! Tooltip module
//!
//! A tooltip ties one disclosure and one popper to the shared hover-intent
//! coordinator, and hands the host prop bundles for the trigger, the
//! floating body and its arrow.

mod tooltip_events;
mod tooltip_render;
mod tooltip_state;

pub use tooltip_events::{ArrowProps, FloatingProps, TriggerEvent, TriggerProps};
pub use tooltip_render::render_tooltip;
pub use tooltip_state::{Tooltip, TooltipOptions, tooltip_size};

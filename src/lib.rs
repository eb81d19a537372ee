//! Hover-intent coordination for tooltips and popovers.
//!
//! A [`HoverIntent`] coordinator delays showing and hiding tooltips so that
//! brushing past a trigger does nothing, and moving straight from one
//! trigger to the next swaps tooltips without waiting. Each [`Tooltip`]
//! combines a [`Disclosure`] (open state with callbacks), a
//! [`popper::Popper`] (position against its trigger) and a registration with
//! the coordinator.
//!
//! Time is virtual: the host drives the shared [`Timeline`] from its event
//! loop, which also makes every timing behaviour testable.

pub mod app;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod intent;
pub mod popper;
pub mod timer;
pub mod tooltip;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use disclosure::{Disclosure, DisclosureOptions};
pub use error::HovertipError;
pub use intent::{Delays, HoverIntent, TooltipId};
pub use timer::{Flushable, Timeline};
pub use tooltip::{Tooltip, TooltipOptions, TriggerEvent};

//! Hover-intent module
//!
//! Coordinates delayed show/hide of tooltips that share one application
//! root. At most one tooltip is active at a time, and moving the pointer
//! straight from one trigger to the next skips the show delay.
//!
//! Build one [`HoverIntent`] per root and hand clones of it to every
//! tooltip. Independent roots (for example separate tests) never interfere.

mod coordinator;
mod identity;
mod pending;

pub use coordinator::{Delays, Disclose, HoverIntent};
pub use identity::TooltipId;
pub use pending::{Pending, PendingKind, PendingOp};


#[cfg(test)]
#[path = "intent/scenario_tests.rs"]
mod scenario_tests;

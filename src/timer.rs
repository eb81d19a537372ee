//! Timer module
//!
//! Single-threaded, virtual-time scheduling for delayed show/hide operations.
//! The host advances the [`Timeline`] from its event loop; every scheduled
//! task is reachable through a [`Flushable`] handle that can cancel it or run
//! it early.

mod flushable;
mod timeline;

pub use flushable::Flushable;
pub use timeline::Timeline;

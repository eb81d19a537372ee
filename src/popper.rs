//! Popper module
//!
//! Contract with the geometry solver that positions a floating element
//! against its reference element, and the per-instance state that holds the
//! mounted elements and the last computed position.

mod node_ref;
mod options;
mod placement;
mod popper_state;

pub use node_ref::{NodeRef, merge_refs};
pub use options::{PopperOptions, Strategy};
pub use placement::{Alignment, Placement, Side};
pub use popper_state::{ArrowStyle, Computed, FloatingStyle, Popper, PositionSolver, arrow_edge};

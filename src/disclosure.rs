//! Disclosure module
//!
//! Open/closed state of one floating element, with open/close callbacks.
//! State is either owned by the instance or delegated to a controlling owner.

mod disclosure_state;

pub use disclosure_state::{Callback, Disclosure, DisclosureOptions, Notify, Ownership};

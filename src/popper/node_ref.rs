use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use ratatui::layout::Rect;

use crate::error::HovertipError;

/// Target that receives the on-screen area of a mounted element.
///
/// `None` is assigned on unmount.
#[derive(Clone)]
pub enum NodeRef {
    /// Shared cell the caller reads back
    Slot(Rc<Cell<Option<Rect>>>),
    /// Called with every assignment
    Callback(Rc<dyn Fn(Option<Rect>)>),
    /// Area fixed by the caller; only the same area may be assigned
    Pinned(Rect),
}

impl NodeRef {
    pub fn slot() -> (Self, Rc<Cell<Option<Rect>>>) {
        let cell = Rc::new(Cell::new(None));
        (NodeRef::Slot(cell.clone()), cell)
    }

    pub fn callback(f: impl Fn(Option<Rect>) + 'static) -> Self {
        NodeRef::Callback(Rc::new(f))
    }

    /// Fails on an empty area or when a pinned target would change.
    pub fn assign(&self, value: Option<Rect>) -> Result<(), HovertipError> {
        if let Some(area) = value.filter(|area| area.is_empty()) {
            return Err(invalid(self, area));
        }
        match self {
            NodeRef::Slot(cell) => cell.set(value),
            NodeRef::Callback(f) => f(value),
            NodeRef::Pinned(pinned) => {
                if let Some(area) = value.filter(|area| area != pinned) {
                    return Err(invalid(self, area));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Slot(cell) => f.debug_tuple("Slot").field(&cell.get()).finish(),
            NodeRef::Callback(_) => f.write_str("Callback"),
            NodeRef::Pinned(area) => f.debug_tuple("Pinned").field(area).finish(),
        }
    }
}

fn invalid(target: &NodeRef, area: Rect) -> HovertipError {
    HovertipError::InvalidRefTarget {
        target: format!("{:?}", target),
        value: format!("{:?}", area),
    }
}

/// Assign `value` to every ref in order, stopping at the first failure
pub fn merge_refs<'a>(
    refs: impl IntoIterator<Item = &'a NodeRef>,
    value: Option<Rect>,
) -> Result<(), HovertipError> {
    for node_ref in refs {
        node_ref.assign(value)?;
    }
    Ok(())
}

use std::rc::Rc;

use ratatui::crossterm::event::KeyCode;
use ratatui::layout::Rect;

use super::tooltip_state::{Tooltip, TooltipInner};
use crate::error::HovertipError;
use crate::intent::TooltipId;
use crate::popper::{ArrowStyle, FloatingStyle, NodeRef, merge_refs};

/// Event delivered by the host to a tooltip trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Pointer entered or moved over the trigger. `on_trigger` is false when
    /// the pointer is over a child of the trigger rather than the trigger
    /// itself.
    MouseOver { on_trigger: bool },
    MouseOut,
    Focus,
    Blur,
    Click,
    MouseDown,
    KeyDown(KeyCode),
}

type Handler<'a> = Box<dyn FnMut(&TriggerEvent) + 'a>;

/// Handlers and attributes to merge onto the trigger element.
///
/// Caller handlers run first, in the order added, then the tooltip's own.
pub struct TriggerProps<'a> {
    tooltip: &'a Tooltip,
    /// Set to the tooltip id while it is open
    pub aria_describedby: Option<TooltipId>,
    handlers: Vec<Handler<'a>>,
    refs: Vec<NodeRef>,
}

impl<'a> TriggerProps<'a> {
    pub fn with_handler(mut self, handler: impl FnMut(&TriggerEvent) + 'a) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn with_ref(mut self, node_ref: NodeRef) -> Self {
        self.refs.push(node_ref);
        self
    }

    pub fn dispatch(&mut self, event: TriggerEvent) {
        for handler in &mut self.handlers {
            handler(&event);
        }
        self.tooltip.handle_trigger_event(event);
    }

    /// Mount (or with `None`, unmount) the trigger at `area`
    pub fn mount(&self, area: Option<Rect>) -> Result<(), HovertipError> {
        let own = self.tooltip.reference_ref();
        merge_refs(self.refs.iter().chain(std::iter::once(&own)), area)
    }
}

/// Attributes to merge onto the floating element
#[derive(Debug, Clone)]
pub struct FloatingProps {
    pub id: TooltipId,
    pub role: &'static str,
    pub style: Option<FloatingStyle>,
    node_ref: NodeRef,
}

impl FloatingProps {
    /// Mount the floating element; only its size is used for positioning
    pub fn mount(&self, area: Option<Rect>, extra: &[NodeRef]) -> Result<(), HovertipError> {
        merge_refs(extra.iter().chain(std::iter::once(&self.node_ref)), area)
    }
}

/// Attributes to merge onto the arrow indicator
#[derive(Debug, Clone)]
pub struct ArrowProps {
    pub style: Option<ArrowStyle>,
    node_ref: NodeRef,
}

impl ArrowProps {
    pub fn mount(&self, area: Option<Rect>, extra: &[NodeRef]) -> Result<(), HovertipError> {
        merge_refs(extra.iter().chain(std::iter::once(&self.node_ref)), area)
    }
}

impl Tooltip {
    pub fn trigger_props(&self) -> TriggerProps<'_> {
        TriggerProps {
            tooltip: self,
            aria_describedby: self.is_open().then(|| self.id.clone()),
            handlers: Vec::new(),
            refs: Vec::new(),
        }
    }

    pub fn floating_props(&self) -> FloatingProps {
        FloatingProps {
            id: self.id.clone(),
            role: "tooltip",
            style: self.inner.borrow().popper.floating_style(),
            node_ref: self.element_ref(|inner, area| inner.popper.set_floating(area)),
        }
    }

    pub fn arrow_props(&self) -> ArrowProps {
        ArrowProps {
            style: self.inner.borrow().popper.arrow_style(),
            node_ref: self.element_ref(|inner, area| inner.popper.set_arrow(area.is_some())),
        }
    }

    pub fn handle_trigger_event(&self, event: TriggerEvent) {
        match event {
            TriggerEvent::MouseOver { on_trigger } => {
                if self.is_open() && on_trigger {
                    return;
                }
                self.show_tooltip();
            }
            TriggerEvent::Focus => self.show_tooltip(),
            TriggerEvent::MouseOut | TriggerEvent::Blur => self.hide_tooltip(),
            TriggerEvent::Click => {
                if self.behavior.hide_on_click {
                    self.hide_immediately();
                }
            }
            TriggerEvent::MouseDown => {
                if self.behavior.hide_on_mouse_down {
                    self.hide_immediately();
                }
            }
            TriggerEvent::KeyDown(code) => {
                self.handle_key(code);
            }
        }
    }

    /// Window-level key listener. Escape dismisses an open tooltip.
    pub fn handle_key(&self, code: KeyCode) -> bool {
        if code == KeyCode::Esc && self.is_open() {
            self.hide_immediately();
            return true;
        }
        false
    }

    fn reference_ref(&self) -> NodeRef {
        self.element_ref(|inner, area| inner.popper.set_reference(area))
    }

    /// Ref that applies `mount` to this tooltip and repositions it if open.
    /// Inert once the tooltip is dropped.
    fn element_ref(&self, mount: fn(&mut TooltipInner, Option<Rect>)) -> NodeRef {
        let weak = Rc::downgrade(&self.inner);
        NodeRef::callback(move |area| {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                mount(&mut inner, area);
                if inner.disclosure.is_open() {
                    inner.popper.force_update();
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;

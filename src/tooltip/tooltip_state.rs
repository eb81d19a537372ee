use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::disclosure::{Callback, Disclosure, DisclosureOptions, Notify};
use crate::intent::{Disclose, HoverIntent, TooltipId};
use crate::popper::{Placement, Popper, PopperOptions, PositionSolver};
use crate::widgets::popup::CellSolver;

/// Borders plus one cell of padding on each side
const FRAME_WIDTH: u16 = 4;
const FRAME_HEIGHT: u16 = 2;

pub struct TooltipOptions {
    /// Element id; generated from the coordinator when absent
    pub id: Option<TooltipId>,
    /// Overrides the coordinator's show delay
    pub show_delay: Option<Duration>,
    /// Overrides the coordinator's hide delay
    pub hide_delay: Option<Duration>,
    pub hide_on_click: bool,
    pub hide_on_mouse_down: bool,
    /// Controlled open state
    pub is_open: Option<bool>,
    pub default_is_open: bool,
    pub label: String,
    pub popper: PopperOptions,
    /// Run after the tooltip opens (or, when controlled, is asked to). The
    /// tooltip is not borrowed while it runs, so it may show or hide
    /// tooltips on the same coordinator, itself included.
    pub on_show: Option<Callback>,
    /// Run after the tooltip closes. Same re-entrancy as `on_show`.
    pub on_hide: Option<Callback>,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            id: None,
            show_delay: None,
            hide_delay: None,
            hide_on_click: false,
            hide_on_mouse_down: false,
            is_open: None,
            default_is_open: false,
            label: String::new(),
            popper: PopperOptions::default(),
            on_show: None,
            on_hide: None,
        }
    }
}

impl TooltipOptions {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.popper.placement = placement;
        self
    }
}

/// Cell size of the tooltip body for `label`
pub fn tooltip_size(label: &str) -> (u16, u16) {
    let lines = label.lines().count().max(1) as u16;
    let width = label.lines().map(UnicodeWidthStr::width).max().unwrap_or(0) as u16;
    (
        width.saturating_add(FRAME_WIDTH),
        lines.saturating_add(FRAME_HEIGHT),
    )
}

pub(super) struct TooltipInner {
    pub disclosure: Disclosure,
    pub popper: Popper,
    pub label: String,
}

impl TooltipInner {
    fn measure(&mut self) {
        let (width, height) = tooltip_size(&self.label);
        self.popper.set_floating(Some(Rect::new(0, 0, width, height)));
    }

    fn refresh_if_open(&mut self) {
        if self.disclosure.is_open() {
            self.popper.force_update();
        }
    }
}

impl Disclose for TooltipInner {
    fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    fn open(&mut self) -> Option<Notify> {
        let was_open = self.disclosure.is_open();
        let notify = self.disclosure.begin_open();
        if !was_open {
            self.refresh_if_open();
        }
        notify
    }

    fn close(&mut self) -> Option<Notify> {
        self.disclosure.begin_close()
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Behavior {
    pub show_delay: Option<Duration>,
    pub hide_delay: Option<Duration>,
    pub hide_on_click: bool,
    pub hide_on_mouse_down: bool,
}

/// One tooltip instance.
///
/// Registers with the coordinator on construction and releases itself on
/// drop, cancelling anything still scheduled for it.
pub struct Tooltip {
    pub(super) id: TooltipId,
    pub(super) intent: HoverIntent,
    pub(super) inner: Rc<RefCell<TooltipInner>>,
    pub(super) behavior: Behavior,
}

impl Tooltip {
    pub fn new(intent: &HoverIntent, options: TooltipOptions) -> Self {
        Self::with_solver(intent, options, Box::new(CellSolver))
    }

    pub fn with_solver(
        intent: &HoverIntent,
        options: TooltipOptions,
        solver: Box<dyn PositionSolver>,
    ) -> Self {
        let id = options.id.unwrap_or_else(|| intent.next_id());
        let disclosure = Disclosure::new(DisclosureOptions {
            is_open: options.is_open,
            default_is_open: options.default_is_open,
            on_open: options.on_show,
            on_close: options.on_hide,
        });
        let mut inner = TooltipInner {
            disclosure,
            popper: Popper::new(options.popper, solver),
            label: options.label,
        };
        inner.measure();

        let inner = Rc::new(RefCell::new(inner));
        intent.register(id.clone(), &inner);

        Self {
            id,
            intent: intent.clone(),
            inner,
            behavior: Behavior {
                show_delay: options.show_delay,
                hide_delay: options.hide_delay,
                hide_on_click: options.hide_on_click,
                hide_on_mouse_down: options.hide_on_mouse_down,
            },
        }
    }

    pub fn id(&self) -> &TooltipId {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().disclosure.is_open()
    }

    pub fn is_controlled(&self) -> bool {
        self.inner.borrow().disclosure.is_controlled()
    }

    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    /// Placement in use after the last position update
    pub fn placement(&self) -> Placement {
        self.inner.borrow().popper.placement()
    }

    pub fn update_count(&self) -> u64 {
        self.inner.borrow().popper.update_count()
    }

    /// Open now, closing whichever tooltip this coordinator showed last
    pub fn show(&self) {
        self.intent.request_show_after(&self.id, Duration::ZERO);
    }

    /// Close now and drop anything pending
    pub fn hide(&self) {
        self.hide_immediately();
    }

    /// Replace the label. An open tooltip is re-measured and repositioned.
    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        let mut inner = self.inner.borrow_mut();
        if inner.label == label {
            return;
        }
        inner.label = label;
        inner.measure();
        inner.refresh_if_open();
    }

    /// New controlled value from the owner. Ignored for uncontrolled tooltips.
    pub fn set_controlled_open(&self, is_open: bool) {
        let mut inner = self.inner.borrow_mut();
        let was_open = inner.disclosure.is_open();
        inner.disclosure.set_controlled_open(is_open);
        if !was_open {
            inner.refresh_if_open();
        }
    }

    /// Area the tooltip must stay within, usually the frame
    pub fn set_boundary(&self, boundary: Rect) {
        self.inner.borrow_mut().popper.set_boundary(boundary);
    }

    pub(super) fn show_tooltip(&self) {
        let delay = self
            .behavior
            .show_delay
            .unwrap_or_else(|| self.intent.delays().show);
        self.intent.request_show_after(&self.id, delay);
    }

    pub(super) fn hide_tooltip(&self) {
        let delay = self
            .behavior
            .hide_delay
            .unwrap_or_else(|| self.intent.delays().hide);
        self.intent.request_hide_after(&self.id, delay);
    }

    pub(super) fn hide_immediately(&self) {
        self.intent.request_hide_immediate(&self.id);
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        self.intent.release(&self.id);
    }
}

impl std::fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tooltip")
            .field("id", &self.id)
            .field("open", &self.is_open())
            .field("label", &self.label())
            .finish()
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;

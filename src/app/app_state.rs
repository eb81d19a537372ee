use std::time::Duration;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::intent::{HoverIntent, TooltipId};
use crate::timer::Timeline;
use crate::tooltip::{Tooltip, TooltipOptions, TriggerEvent};

/// `(label, tooltip text)` for each toolbar button
pub const BUTTONS: [(&str, &str); 5] = [
    ("New", "Create an empty document"),
    ("Open", "Open a file from disk"),
    ("Save", "Write changes to disk\nCtrl+S"),
    ("Export", "Export as PDF, HTML or Markdown"),
    ("Quit", "Leave the demo (q)"),
];

pub struct ToolbarButton {
    pub label: &'static str,
    pub tooltip: Tooltip,
    /// Where the button was last drawn
    pub area: Option<Rect>,
}

/// Application state
pub struct App {
    pub intent: HoverIntent,
    pub buttons: Vec<ToolbarButton>,
    /// Button under the pointer
    pub hovered: Option<usize>,
    /// Button with keyboard focus
    pub focused: Option<usize>,
    /// Button the left mouse button went down on
    pub pressed: Option<usize>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let intent = HoverIntent::new(config.tooltip.delays(), Timeline::new());
        let buttons = BUTTONS
            .iter()
            .map(|(label, text)| ToolbarButton {
                label,
                tooltip: Tooltip::new(
                    &intent,
                    TooltipOptions {
                        hide_on_click: config.tooltip.hide_on_click,
                        hide_on_mouse_down: config.tooltip.hide_on_mouse_down,
                        popper: config.popper_options(),
                        ..TooltipOptions::labelled(*text)
                    },
                ),
                area: None,
            })
            .collect();

        Self {
            intent,
            buttons,
            hovered: None,
            focused: None,
            pressed: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move virtual time to `now`, running any show/hide that fell due.
    /// Returns true if anything ran and the screen needs redrawing.
    pub fn tick(&self, now: Duration) -> bool {
        self.intent.timeline().advance_to(now) > 0
    }

    /// Time until the next scheduled show/hide, if any
    pub fn time_to_next_deadline(&self, now: Duration) -> Option<Duration> {
        self.intent
            .timeline()
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    pub fn open_tooltip(&self) -> Option<usize> {
        self.buttons.iter().position(|button| button.tooltip.is_open())
    }

    pub(super) fn dispatch(&self, index: usize, event: TriggerEvent) {
        if let Some(button) = self.buttons.get(index) {
            button.tooltip.trigger_props().dispatch(event);
        }
    }

    /// Label of the button owning the tooltip `id`
    pub fn label_of(&self, id: &TooltipId) -> &'static str {
        self.buttons
            .iter()
            .find(|button| button.tooltip.id() == id)
            .map_or("-", |button| button.label)
    }

    /// One-line summary of the coordinator for the status bar
    pub fn status_line(&self) -> String {
        let name = |id: Option<TooltipId>| id.map_or("-", |id| self.label_of(&id));
        let pending = match (self.intent.pending_show(), self.intent.pending_hide()) {
            (Some(op), _) | (None, Some(op)) => format!(
                "{:?} {} @{}ms",
                op.kind(),
                self.label_of(op.id()),
                op.fire_at().as_millis()
            ),
            (None, None) => "none".to_string(),
        };
        format!(
            " active: {}  visible: {}  pending: {} ",
            name(self.intent.active()),
            name(self.intent.visible()),
            pending
        )
    }
}

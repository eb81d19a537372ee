// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::intent::Delays;
use crate::popper::{Placement, PopperOptions};

/// `[tooltip]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub show_delay_ms: u64,
    pub hide_delay_ms: u64,
    pub hide_on_click: bool,
    pub hide_on_mouse_down: bool,
    pub placement: Placement,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        let delays = Delays::default();
        TooltipConfig {
            show_delay_ms: delays.show.as_millis() as u64,
            hide_delay_ms: delays.hide.as_millis() as u64,
            hide_on_click: false,
            hide_on_mouse_down: false,
            placement: Placement::default(),
        }
    }
}

impl TooltipConfig {
    pub fn delays(&self) -> Delays {
        Delays::new(
            Duration::from_millis(self.show_delay_ms),
            Duration::from_millis(self.hide_delay_ms),
        )
    }
}

/// `[popper]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PopperConfig {
    pub flip: bool,
    pub prevent_overflow: bool,
    pub fixed: bool,
    pub gutter: Option<u16>,
    pub arrow_size: u16,
}

impl Default for PopperConfig {
    fn default() -> Self {
        let options = PopperOptions::default();
        PopperConfig {
            flip: options.flip,
            prevent_overflow: options.prevent_overflow,
            fixed: options.fixed,
            gutter: options.gutter,
            arrow_size: options.arrow_size,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub popper: PopperConfig,
}

impl Config {
    /// Popper options for a tooltip placed at the configured placement
    pub fn popper_options(&self) -> PopperOptions {
        PopperOptions {
            placement: self.tooltip.placement,
            flip: self.popper.flip,
            prevent_overflow: self.popper.prevent_overflow,
            fixed: self.popper.fixed,
            gutter: self.popper.gutter,
            arrow_size: self.popper.arrow_size,
            ..PopperOptions::default()
        }
    }
}

use super::placement::Placement;

/// Positioning strategy handed through to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Absolute,
    Fixed,
}

/// Solver configuration for one floating element.
///
/// Distances are in the host's units (terminal cells for the bundled
/// solver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopperOptions {
    pub placement: Placement,
    /// Move to the opposite side when the preferred side overflows
    pub flip: bool,
    /// Keep the floating element inside the boundary
    pub prevent_overflow: bool,
    pub fixed: bool,
    /// `(skidding, distance)` override. Defaults to `(0, gutter)`.
    pub offset: Option<(i16, u16)>,
    /// Gap between reference and floating element. Defaults to the arrow size.
    pub gutter: Option<u16>,
    pub arrow_size: u16,
    /// Recompute when the boundary changes
    pub events_enabled: bool,
}

impl PopperOptions {
    pub fn gutter(&self) -> u16 {
        self.gutter.unwrap_or(self.arrow_size)
    }

    pub fn offset(&self) -> (i16, u16) {
        self.offset.unwrap_or((0, self.gutter()))
    }

    pub fn strategy(&self) -> Strategy {
        if self.fixed {
            Strategy::Fixed
        } else {
            Strategy::Absolute
        }
    }
}

impl Default for PopperOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Bottom,
            flip: true,
            prevent_overflow: true,
            fixed: false,
            offset: None,
            gutter: None,
            arrow_size: 1,
            events_enabled: true,
        }
    }
}

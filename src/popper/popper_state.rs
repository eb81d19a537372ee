use ratatui::layout::{Rect, Size};

use super::options::{PopperOptions, Strategy};
use super::placement::{Placement, Side};

/// Resolved position of the floating element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingStyle {
    pub area: Rect,
    pub strategy: Strategy,
}

/// Resolved position of the arrow indicator.
///
/// `edge` is the side of the floating element the arrow sits on, which is
/// always opposite the placement side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowStyle {
    pub edge: Side,
    pub size: u16,
    pub area: Rect,
}

impl ArrowStyle {
    /// Glyph pointing from the floating element toward the reference
    pub fn symbol(&self) -> &'static str {
        match self.edge {
            Side::Top => "▲",
            Side::Bottom => "▼",
            Side::Left => "◀",
            Side::Right => "▶",
        }
    }
}

/// Side of the floating element carrying the arrow for `placement`
pub fn arrow_edge(placement: Placement) -> Side {
    placement.side().opposite()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computed {
    pub placement: Placement,
    pub floating: FloatingStyle,
    pub arrow: Option<ArrowStyle>,
}

/// External geometry solver.
///
/// Given the reference area, the floating element's size and the boundary,
/// returns the placement actually used and where to draw both elements.
pub trait PositionSolver {
    fn compute(
        &self,
        reference: Rect,
        floating: Size,
        boundary: Rect,
        options: &PopperOptions,
        with_arrow: bool,
    ) -> Computed;
}

/// Mounted elements and last computed position of one floating element.
///
/// Updates are no-ops until both the reference and the floating element
/// are mounted.
pub struct Popper {
    options: PopperOptions,
    solver: Box<dyn PositionSolver>,
    reference: Option<Rect>,
    floating: Option<Rect>,
    arrow: bool,
    boundary: Option<Rect>,
    computed: Option<Computed>,
    updates: u64,
}

impl Popper {
    pub fn new(options: PopperOptions, solver: Box<dyn PositionSolver>) -> Self {
        Self {
            options,
            solver,
            reference: None,
            floating: None,
            arrow: false,
            boundary: None,
            computed: None,
            updates: 0,
        }
    }

    pub fn options(&self) -> &PopperOptions {
        &self.options
    }

    /// Change the preferred placement. Takes effect on the next update.
    pub fn place(&mut self, placement: Placement) {
        self.options.placement = placement;
    }

    pub fn set_reference(&mut self, area: Option<Rect>) {
        self.reference = area;
        if area.is_none() {
            self.computed = None;
        }
    }

    /// Only the size of the floating element is used; the solver picks
    /// where it goes.
    pub fn set_floating(&mut self, area: Option<Rect>) {
        self.floating = area;
        if area.is_none() {
            self.computed = None;
        }
    }

    pub fn set_arrow(&mut self, mounted: bool) {
        self.arrow = mounted;
    }

    /// Area the floating element must stay within. Recomputes straight away
    /// when `events_enabled` is set.
    pub fn set_boundary(&mut self, boundary: Rect) {
        let changed = self.boundary != Some(boundary);
        self.boundary = Some(boundary);
        if changed && self.options.events_enabled {
            self.force_update();
        }
    }

    pub fn is_ready(&self) -> bool {
        self.reference.is_some() && self.floating.is_some()
    }

    /// Recompute the position. Returns `false` when an element is missing.
    pub fn force_update(&mut self) -> bool {
        let (Some(reference), Some(floating)) = (self.reference, self.floating) else {
            return false;
        };
        let boundary = self.boundary.unwrap_or(Rect::new(0, 0, u16::MAX, u16::MAX));
        let size = Size::new(floating.width, floating.height);
        let computed = self
            .solver
            .compute(reference, size, boundary, &self.options, self.arrow);
        log::trace!(
            "popper update: {} -> {:?}",
            computed.placement,
            computed.floating.area
        );
        self.computed = Some(computed);
        self.updates += 1;
        true
    }

    /// Placement actually in use, or the preferred one before the first update
    pub fn placement(&self) -> Placement {
        self.computed
            .map(|computed| computed.placement)
            .unwrap_or(self.options.placement)
    }

    pub fn floating_style(&self) -> Option<FloatingStyle> {
        self.computed.map(|computed| computed.floating)
    }

    pub fn arrow_style(&self) -> Option<ArrowStyle> {
        self.computed.and_then(|computed| computed.arrow)
    }

    pub fn update_count(&self) -> u64 {
        self.updates
    }
}

impl std::fmt::Debug for Popper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popper")
            .field("options", &self.options)
            .field("reference", &self.reference)
            .field("floating", &self.floating)
            .field("computed", &self.computed)
            .finish()
    }
}

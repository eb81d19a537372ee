use ratatui::{
    Frame,
    layout::{Rect, Size},
    widgets::Clear,
};

use crate::popper::{
    Alignment, ArrowStyle, Computed, FloatingStyle, Placement, PopperOptions, PositionSolver, Side,
    arrow_edge,
};

/// Cell-grid solver: places the floating element against one side of the
/// reference, flips to the opposite side when the preferred one overflows
/// and clamps into the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellSolver;

impl PositionSolver for CellSolver {
    fn compute(
        &self,
        reference: Rect,
        floating: Size,
        boundary: Rect,
        options: &PopperOptions,
        with_arrow: bool,
    ) -> Computed {
        let offset = options.offset();
        let preferred = options.placement;

        let mut placement = preferred;
        let mut origin = anchored_origin(preferred, reference, floating, offset);
        if options.flip && !fits_main_axis(preferred.side(), origin, floating, boundary) {
            let flipped = preferred.opposite();
            let flipped_origin = anchored_origin(flipped, reference, floating, offset);
            if fits_main_axis(flipped.side(), flipped_origin, floating, boundary) {
                placement = flipped;
                origin = flipped_origin;
            }
        }

        let area = if options.prevent_overflow {
            clamp_into(origin, floating, boundary)
        } else {
            to_rect(origin, floating)
        };

        let arrow = if with_arrow && offset.1 > 0 {
            arrow_cell(placement, reference, area).map(|cell| ArrowStyle {
                edge: arrow_edge(placement),
                size: options.arrow_size,
                area: cell,
            })
        } else {
            None
        };

        Computed {
            placement,
            floating: FloatingStyle {
                area,
                strategy: options.strategy(),
            },
            arrow,
        }
    }
}

/// Top-left corner for `placement`, before any clamping. May be negative.
pub fn anchored_origin(
    placement: Placement,
    reference: Rect,
    floating: Size,
    (skidding, distance): (i16, u16),
) -> (i32, i32) {
    let (rx, ry) = (reference.x as i32, reference.y as i32);
    let (rw, rh) = (reference.width as i32, reference.height as i32);
    let (fw, fh) = (floating.width as i32, floating.height as i32);
    let distance = distance as i32;
    let skidding = skidding as i32;

    let cross = |start: i32, reference_len: i32, floating_len: i32| {
        let aligned = match placement.alignment() {
            Alignment::Start => start,
            Alignment::Center => start + (reference_len - floating_len) / 2,
            Alignment::End => start + reference_len - floating_len,
        };
        aligned + skidding
    };

    match placement.side() {
        Side::Top => (cross(rx, rw, fw), ry - distance - fh),
        Side::Bottom => (cross(rx, rw, fw), ry + rh + distance),
        Side::Left => (rx - distance - fw, cross(ry, rh, fh)),
        Side::Right => (rx + rw + distance, cross(ry, rh, fh)),
    }
}

fn fits_main_axis(side: Side, (x, y): (i32, i32), floating: Size, boundary: Rect) -> bool {
    match side {
        Side::Top => y >= boundary.y as i32,
        Side::Bottom => y + floating.height as i32 <= boundary.bottom() as i32,
        Side::Left => x >= boundary.x as i32,
        Side::Right => x + floating.width as i32 <= boundary.right() as i32,
    }
}

fn clamp_into((x, y): (i32, i32), floating: Size, boundary: Rect) -> Rect {
    let width = floating.width.min(boundary.width);
    let height = floating.height.min(boundary.height);
    let max_x = boundary.right() as i32 - width as i32;
    let max_y = boundary.bottom() as i32 - height as i32;

    Rect {
        x: x.clamp(boundary.x as i32, max_x) as u16,
        y: y.clamp(boundary.y as i32, max_y) as u16,
        width,
        height,
    }
}

fn to_rect((x, y): (i32, i32), floating: Size) -> Rect {
    Rect {
        x: x.clamp(0, u16::MAX as i32) as u16,
        y: y.clamp(0, u16::MAX as i32) as u16,
        width: floating.width,
        height: floating.height,
    }
}

/// Cell between the floating element and the reference, aligned with the
/// reference's centre as far as the floating element's edge allows.
fn arrow_cell(placement: Placement, reference: Rect, floating: Rect) -> Option<Rect> {
    if floating.is_empty() {
        return None;
    }
    let center_x = reference
        .x
        .saturating_add(reference.width / 2)
        .clamp(floating.x, floating.right() - 1);
    let center_y = reference
        .y
        .saturating_add(reference.height / 2)
        .clamp(floating.y, floating.bottom() - 1);

    let (x, y) = match arrow_edge(placement) {
        Side::Top => (center_x, floating.y.checked_sub(1)?),
        Side::Bottom => (center_x, floating.bottom()),
        Side::Left => (floating.x.checked_sub(1)?, center_y),
        Side::Right => (floating.right(), center_y),
    };
    Some(Rect::new(x, y, 1, 1))
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

//! Tooltip rendering
//!
//! Draws an open tooltip body and its arrow at the position computed by the
//! popper. The trigger itself is drawn by the host.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::{Block, BorderType, Padding, Paragraph},
};

use super::tooltip_state::Tooltip;
use crate::widgets::popup;

const TOOLTIP_FG: Color = Color::White;
const TOOLTIP_BG: Color = Color::DarkGray;

/// Render `tooltip` if it is open and has been positioned
pub fn render_tooltip(tooltip: &Tooltip, frame: &mut Frame) {
    if !tooltip.is_open() {
        return;
    }

    let frame_area = frame.area();
    let Some(style) = tooltip.floating_props().style else {
        return;
    };
    let area = style.area.intersection(frame_area);
    if area.is_empty() {
        return;
    }

    popup::clear_area(frame, area);

    let body_style = Style::default().fg(TOOLTIP_FG).bg(TOOLTIP_BG);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .padding(Padding::horizontal(1))
        .style(body_style);
    let label = tooltip.label();
    frame.render_widget(Paragraph::new(Text::raw(label)).block(block), area);

    if let Some(arrow) = tooltip.arrow_props().style {
        render_arrow(frame, arrow.area, arrow.symbol());
    }
}

/// Arrow glyph drawn in the body colour so it reads as part of the tooltip
fn render_arrow(frame: &mut Frame, area: Rect, symbol: &str) {
    let area = area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let arrow = Paragraph::new(symbol).style(Style::default().fg(TOOLTIP_BG));
    frame.render_widget(arrow, area);
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;

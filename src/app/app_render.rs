use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::tooltip::render_tooltip;

const TOOLBAR_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;
const HINT: &str = " hover or Tab through the buttons · Esc dismisses · q quits ";

impl App {
    /// Render the UI, mounting every trigger at the area it was drawn in
    pub fn render(&mut self, frame: &mut Frame) {
        let [toolbar_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_toolbar(frame, toolbar_area);

        let body = Paragraph::new(Line::from(HINT).style(Style::default().fg(Color::Gray)))
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(body, body_area);

        let status = Paragraph::new(self.status_line())
            .style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(status, status_area);

        // Tooltips go last so they float above everything else
        for button in &self.buttons {
            render_tooltip(&button.tooltip, frame);
        }
    }

    fn render_toolbar(&mut self, frame: &mut Frame, area: Rect) {
        let boundary = frame.area();
        let mut x = area.x;
        for (index, button) in self.buttons.iter_mut().enumerate() {
            let width = (button.label.width() as u16).saturating_add(4);
            let slot = Rect::new(x, area.y, width, area.height).intersection(area);
            x = x.saturating_add(width).saturating_add(BUTTON_GAP);

            let placed = (!slot.is_empty()).then_some(slot);
            button.area = placed;
            button.tooltip.set_boundary(boundary);
            mount(button, placed);

            let Some(slot) = placed else {
                continue;
            };

            let mut style = Style::default().fg(Color::White);
            if self.hovered == Some(index) {
                style = style.fg(Color::Yellow);
            }
            if self.focused == Some(index) {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Cyan);
            }
            let block = Block::bordered().border_type(BorderType::Rounded).border_style(style);
            let label = Paragraph::new(button.label).style(style).centered().block(block);
            frame.render_widget(label, slot);
        }
    }
}

fn mount(button: &super::app_state::ToolbarButton, area: Option<Rect>) {
    let tooltip = &button.tooltip;
    if let Err(e) = tooltip.trigger_props().mount(area) {
        log::warn!("could not mount trigger {}: {}", button.label, e);
    }
    let arrow = area.map(|_| Rect::new(0, 0, 1, 1));
    if let Err(e) = tooltip.arrow_props().mount(arrow, &[]) {
        log::warn!("could not mount arrow for {}: {}", button.label, e);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

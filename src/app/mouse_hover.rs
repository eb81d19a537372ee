//! Mouse hover handling
//!
//! Turns raw pointer events into trigger events for the button under the
//! cursor, using the areas recorded during the last render.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app_state::App;
use crate::tooltip::TriggerEvent;

/// Index of the button drawn at `(column, row)`
pub fn button_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    app.buttons
        .iter()
        .position(|button| button.area.is_some_and(|area| area.contains(position)))
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let target = button_at(app, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => handle_hover(app, target),
        MouseEventKind::Down(MouseButton::Left) => {
            handle_hover(app, target);
            app.pressed = target;
            if let Some(index) = target {
                app.dispatch(index, TriggerEvent::MouseDown);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let pressed = app.pressed.take();
            if let Some(index) = target.filter(|index| Some(*index) == pressed) {
                app.activate(index);
            }
        }
        _ => {}
    }
}

/// Move hover from the previous button to `target`
pub fn handle_hover(app: &mut App, target: Option<usize>) {
    if app.hovered == target {
        return;
    }
    if let Some(previous) = app.hovered.take() {
        app.dispatch(previous, TriggerEvent::MouseOut);
    }
    if let Some(index) = target {
        app.dispatch(index, TriggerEvent::MouseOver { on_trigger: true });
    }
    app.hovered = target;
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;

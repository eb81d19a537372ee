use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_hover;
use crate::tooltip::TriggerEvent;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => mouse_hover::handle_mouse(self, mouse),
            Event::FocusLost => {
                mouse_hover::handle_hover(self, None);
                self.move_focus(None);
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Window-level listener: every tooltip sees Escape
        if key.code == KeyCode::Esc {
            for button in &self.buttons {
                button.tooltip.handle_key(key.code);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.move_focus(Some(self.next_focus(1))),
            KeyCode::BackTab => self.move_focus(Some(self.next_focus(-1))),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.focused {
                    self.activate(index);
                }
            }
            code => {
                if let Some(index) = self.focused {
                    self.dispatch(index, TriggerEvent::KeyDown(code));
                }
            }
        }
    }

    /// Press button `index`
    pub fn activate(&mut self, index: usize) {
        self.dispatch(index, TriggerEvent::Click);
        if self.buttons.get(index).is_some_and(|button| button.label == "Quit") {
            self.should_quit = true;
        }
    }

    fn next_focus(&self, step: isize) -> usize {
        let count = self.buttons.len() as isize;
        match self.focused {
            Some(index) => (index as isize + step).rem_euclid(count) as usize,
            None if step < 0 => self.buttons.len().saturating_sub(1),
            None => 0,
        }
    }

    /// Blur the focused button and focus `target`
    pub fn move_focus(&mut self, target: Option<usize>) {
        if self.focused == target {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.dispatch(previous, TriggerEvent::Blur);
        }
        if let Some(index) = target {
            self.dispatch(index, TriggerEvent::Focus);
        }
        self.focused = target;
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

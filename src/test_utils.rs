#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::app::App;
    use crate::config::Config;
    use crate::disclosure::{Disclosure, DisclosureOptions};
    use crate::intent::{Delays, HoverIntent, TooltipId};
    use crate::timer::Timeline;

    /// Open/close callbacks recorded as `("open" | "close", id, virtual time)`
    pub type EventLog = Rc<RefCell<Vec<(&'static str, String, Duration)>>>;

    pub fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    pub fn coordinator(show_ms: u64, hide_ms: u64) -> HoverIntent {
        HoverIntent::new(Delays::new(ms(show_ms), ms(hide_ms)), Timeline::new())
    }

    pub fn event_log() -> EventLog {
        Rc::new(RefCell::new(Vec::new()))
    }

    /// Register an uncontrolled disclosure under `id` whose callbacks write
    /// into `log` stamped with the coordinator's virtual time.
    ///
    /// The coordinator only holds a weak reference, so the returned
    /// disclosure must stay bound for as long as the instance is in use.
    #[must_use = "dropping the disclosure unregisters the instance"]
    pub fn recorded_instance(
        intent: &HoverIntent,
        id: &str,
        log: &EventLog,
    ) -> (TooltipId, Rc<RefCell<Disclosure>>) {
        let tooltip_id = TooltipId::new(id);

        let open_log = log.clone();
        let open_clock = intent.timeline().clone();
        let open_id = id.to_string();
        let close_log = log.clone();
        let close_clock = intent.timeline().clone();
        let close_id = id.to_string();

        let disclosure = Rc::new(RefCell::new(Disclosure::new(DisclosureOptions {
            on_open: Some(Box::new(move || {
                open_log
                    .borrow_mut()
                    .push(("open", open_id.clone(), open_clock.now()))
            })),
            on_close: Some(Box::new(move || {
                close_log
                    .borrow_mut()
                    .push(("close", close_id.clone(), close_clock.now()))
            })),
            ..Default::default()
        })));
        intent.register(tooltip_id.clone(), &disclosure);
        (tooltip_id, disclosure)
    }

    pub fn entries(log: &EventLog) -> Vec<(&'static str, String, u128)> {
        log.borrow()
            .iter()
            .map(|(kind, id, at)| (*kind, id.clone(), at.as_millis()))
            .collect()
    }

    /// Demo app with the given delays, rendered once so button areas are known
    pub fn test_app(show_ms: u64, hide_ms: u64) -> App {
        let mut config = Config::default();
        config.tooltip.show_delay_ms = show_ms;
        config.tooltip.hide_delay_ms = hide_ms;
        let mut app = App::new(&config);
        render_app(&mut app, 80, 12);
        app
    }

    pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }
}

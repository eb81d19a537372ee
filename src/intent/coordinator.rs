use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::identity::TooltipId;
use super::pending::{Pending, PendingKind, PendingOp};
use crate::disclosure::{Disclosure, Notify};
use crate::timer::Timeline;

pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Open/close surface the coordinator drives.
///
/// `open` and `close` apply the transition and hand back the callback owed
/// for it. The coordinator runs that callback only after releasing the
/// instance, so callbacks may call back into the coordinator.
pub trait Disclose {
    fn is_open(&self) -> bool;
    fn open(&mut self) -> Option<Notify>;
    fn close(&mut self) -> Option<Notify>;
}

impl Disclose for Disclosure {
    fn is_open(&self) -> bool {
        Disclosure::is_open(self)
    }

    fn open(&mut self) -> Option<Notify> {
        self.begin_open()
    }

    fn close(&mut self) -> Option<Notify> {
        self.begin_close()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub show: Duration,
    pub hide: Duration,
}

impl Delays {
    pub fn new(show: Duration, hide: Duration) -> Self {
        Self { show, hide }
    }

    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self::new(DEFAULT_SHOW_DELAY, DEFAULT_HIDE_DELAY)
    }
}

type Instance = Rc<RefCell<dyn Disclose>>;

struct IntentState {
    delays: Delays,
    active: Option<TooltipId>,
    visible: Option<TooltipId>,
    show: Option<Pending>,
    hide: Option<Pending>,
    instances: HashMap<TooltipId, Weak<RefCell<dyn Disclose>>>,
    next_id: u64,
}

impl IntentState {
    fn instance(&self, id: &TooltipId) -> Option<Instance> {
        self.instances.get(id).and_then(Weak::upgrade)
    }

    fn slot(&mut self, kind: PendingKind) -> &mut Option<Pending> {
        match kind {
            PendingKind::Show => &mut self.show,
            PendingKind::Hide => &mut self.hide,
        }
    }

    /// Clear a slot whose task has just run. A slot already holding a newer
    /// operation is left alone.
    fn clear_fired(&mut self, kind: PendingKind) {
        let slot = self.slot(kind);
        if slot.as_ref().is_some_and(|pending| !pending.is_pending()) {
            *slot = None;
        }
    }
}

/// Shared show/hide coordinator for every tooltip under one root.
///
/// Cloning the handle shares the coordinator. Delayed operations run on the
/// [`Timeline`] passed at construction.
#[derive(Clone)]
pub struct HoverIntent {
    state: Rc<RefCell<IntentState>>,
    timeline: Timeline,
}

impl HoverIntent {
    pub fn new(delays: Delays, timeline: Timeline) -> Self {
        Self {
            state: Rc::new(RefCell::new(IntentState {
                delays,
                active: None,
                visible: None,
                show: None,
                hide: None,
                instances: HashMap::new(),
                next_id: 0,
            })),
            timeline,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn delays(&self) -> Delays {
        self.state.borrow().delays
    }

    pub fn set_delays(&self, delays: Delays) {
        self.state.borrow_mut().delays = delays;
    }

    /// Allocate an id for a tooltip that did not bring its own
    pub fn next_id(&self) -> TooltipId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        TooltipId::generated(state.next_id)
    }

    /// Make `instance` reachable by `id`. Only a weak reference is kept.
    pub fn register<D: Disclose + 'static>(&self, id: TooltipId, instance: &Rc<RefCell<D>>) {
        let instance: Instance = instance.clone();
        let weak = Rc::downgrade(&instance);
        self.state.borrow_mut().instances.insert(id, weak);
    }

    /// Forget `id` and cancel everything scheduled for it. Nothing is called
    /// on the instance afterwards.
    pub fn release(&self, id: &TooltipId) {
        let (show, hide) = {
            let mut state = self.state.borrow_mut();
            state.instances.remove(id);
            if state.active.as_ref() == Some(id) {
                state.active = None;
            }
            if state.visible.as_ref() == Some(id) {
                state.visible = None;
            }
            (
                state.show.take_if(|pending| pending.targets(id)),
                state.hide.take_if(|pending| pending.targets(id)),
            )
        };
        for pending in show.iter().chain(hide.iter()) {
            pending.cancel();
        }
        log::debug!("released {}", id);
    }

    pub fn active(&self) -> Option<TooltipId> {
        self.state.borrow().active.clone()
    }

    /// Tooltip most recently opened by this coordinator and not yet closed
    pub fn visible(&self) -> Option<TooltipId> {
        self.state.borrow().visible.clone()
    }

    pub fn pending_show(&self) -> Option<Pending> {
        self.state.borrow().show.clone()
    }

    pub fn pending_hide(&self) -> Option<Pending> {
        self.state.borrow().hide.clone()
    }

    /// Operation currently scheduled for `id`, if any
    pub fn pending_for(&self, id: &TooltipId) -> PendingOp {
        let state = self.state.borrow();
        if let Some(pending) = state.show.as_ref().filter(|p| p.targets(id)) {
            return PendingOp::Show(pending.clone());
        }
        if let Some(pending) = state.hide.as_ref().filter(|p| p.targets(id)) {
            return PendingOp::Hide(pending.clone());
        }
        PendingOp::None
    }

    pub fn request_show(&self, id: &TooltipId) {
        let delay = self.delays().show;
        self.request_show_after(id, delay);
    }

    /// Show `id` after `delay`.
    ///
    /// A hide still pending for another tooltip is flushed first and the
    /// show then happens at once. A hide pending for `id` itself is
    /// cancelled, leaving it open.
    pub fn request_show_after(&self, id: &TooltipId, delay: Duration) {
        let hide = self.state.borrow_mut().hide.take();
        let mut fast_path = false;
        if let Some(hide) = hide {
            if hide.targets(id) {
                hide.cancel();
            } else {
                fast_path = hide.flush();
            }
        }

        let previous_show = self.state.borrow_mut().show.take();
        if let Some(previous_show) = previous_show {
            previous_show.cancel();
        }

        let instance = {
            let mut state = self.state.borrow_mut();
            state.active = Some(id.clone());
            state.instance(id)
        };
        let Some(instance) = instance else {
            log::debug!("show requested for unregistered {}", id);
            return;
        };

        let already_open = instance.borrow().is_open();
        if already_open || fast_path || delay.is_zero() {
            if fast_path {
                log::debug!("fast-path show for {}", id);
            }
            fire_show(&self.state, id);
            return;
        }

        let weak = Rc::downgrade(&self.state);
        let target = id.clone();
        let handle = self.timeline.schedule(delay, move || {
            if let Some(state) = weak.upgrade() {
                fire_show(&state, &target);
            }
        });
        log::debug!("show for {} scheduled in {:?}", id, delay);
        self.state.borrow_mut().show = Some(Pending::new(PendingKind::Show, id.clone(), handle));
    }

    pub fn request_hide(&self, id: &TooltipId) {
        let delay = self.delays().hide;
        self.request_hide_after(id, delay);
    }

    /// Hide `id` after `delay`. A show still pending for `id` is cancelled.
    pub fn request_hide_after(&self, id: &TooltipId, delay: Duration) {
        let (show, instance) = {
            let mut state = self.state.borrow_mut();
            if state.active.as_ref() == Some(id) {
                state.active = None;
            }
            (
                state.show.take_if(|pending| pending.targets(id)),
                state.instance(id),
            )
        };
        if let Some(show) = show {
            show.cancel();
        }

        let Some(instance) = instance else {
            return;
        };
        if !instance.borrow().is_open() {
            return;
        }

        let previous_hide = self.state.borrow_mut().hide.take();
        if let Some(previous_hide) = previous_hide {
            previous_hide.cancel();
        }

        if delay.is_zero() {
            fire_hide(&self.state, id);
            return;
        }

        let weak = Rc::downgrade(&self.state);
        let target = id.clone();
        let handle = self.timeline.schedule(delay, move || {
            if let Some(state) = weak.upgrade() {
                fire_hide(&state, &target);
            }
        });
        log::debug!("hide for {} scheduled in {:?}", id, delay);
        self.state.borrow_mut().hide = Some(Pending::new(PendingKind::Hide, id.clone(), handle));
    }

    /// Close `id` now and leave no operation pending.
    ///
    /// A hide pending for another tooltip is flushed rather than dropped so
    /// that tooltip does not stay open.
    pub fn request_hide_immediate(&self, id: &TooltipId) {
        let (show, hide) = {
            let mut state = self.state.borrow_mut();
            (state.show.take(), state.hide.take())
        };
        if let Some(show) = show {
            show.cancel();
        }
        if let Some(hide) = hide {
            if hide.targets(id) {
                hide.cancel();
            } else {
                hide.flush();
            }
        }

        let instance = {
            let mut state = self.state.borrow_mut();
            if state.active.as_ref() == Some(id) {
                state.active = None;
            }
            if state.visible.as_ref() == Some(id) {
                state.visible = None;
            }
            state.instance(id)
        };
        if let Some(instance) = instance {
            log::debug!("hiding {} immediately", id);
            close(&instance);
        }
    }
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(Delays::default(), Timeline::new())
    }
}

fn fire_show(state: &Rc<RefCell<IntentState>>, id: &TooltipId) {
    let (previous, instance) = {
        let mut state = state.borrow_mut();
        state.clear_fired(PendingKind::Show);
        let Some(instance) = state.instance(id) else {
            return;
        };
        let previous = state
            .visible
            .replace(id.clone())
            .filter(|visible| visible != id)
            .and_then(|visible| state.instance(&visible));
        (previous, instance)
    };

    if let Some(previous) = previous {
        close(&previous);
    }

    let notify = {
        let mut instance = instance.borrow_mut();
        if instance.is_open() {
            None
        } else {
            log::trace!("opening {}", id);
            instance.open()
        }
    };
    if let Some(notify) = notify {
        notify.run();
    }
}

fn fire_hide(state: &Rc<RefCell<IntentState>>, id: &TooltipId) {
    let instance = {
        let mut state = state.borrow_mut();
        state.clear_fired(PendingKind::Hide);
        if state.visible.as_ref() == Some(id) {
            state.visible = None;
        }
        state.instance(id)
    };

    if let Some(instance) = instance {
        log::trace!("closing {}", id);
        close(&instance);
    }
}

/// Close `instance`, running its callback once the borrow is released
fn close(instance: &Instance) {
    let notify = instance.borrow_mut().close();
    if let Some(notify) = notify {
        notify.run();
    }
}

//! Tests for disclosure/disclosure_state

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counter() -> (Rc<Cell<u32>>, Callback) {
    let count = Rc::new(Cell::new(0));
    let sink = count.clone();
    (count, Box::new(move || sink.set(sink.get() + 1)))
}

fn with_counters(is_open: Option<bool>) -> (Disclosure, Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let (opened, on_open) = counter();
    let (closed, on_close) = counter();
    let disclosure = Disclosure::new(DisclosureOptions {
        is_open,
        default_is_open: false,
        on_open: Some(on_open),
        on_close: Some(on_close),
    });
    (disclosure, opened, closed)
}

#[test]
fn test_uncontrolled_starts_closed() {
    let disclosure = Disclosure::uncontrolled();
    assert!(!disclosure.is_open());
    assert!(!disclosure.is_controlled());
}

#[test]
fn test_default_is_open_is_honoured() {
    let disclosure = Disclosure::new(DisclosureOptions {
        default_is_open: true,
        ..Default::default()
    });
    assert!(disclosure.is_open());
    assert_eq!(disclosure.ownership(), Ownership::Owned(true));
}

#[test]
fn test_open_fires_callback_once_per_transition() {
    let (mut disclosure, opened, closed) = with_counters(None);

    assert!(disclosure.open());
    assert!(!disclosure.open());
    assert!(disclosure.is_open());
    assert_eq!(opened.get(), 1);
    assert_eq!(closed.get(), 0);
}

#[test]
fn test_close_fires_callback_once_per_transition() {
    let (mut disclosure, opened, closed) = with_counters(None);

    assert!(!disclosure.close());
    assert_eq!(closed.get(), 0);

    disclosure.open();
    assert!(disclosure.close());
    assert!(!disclosure.close());
    assert!(!disclosure.is_open());
    assert_eq!(opened.get(), 1);
    assert_eq!(closed.get(), 1);
}

#[test]
fn test_missing_callbacks_are_fine() {
    let mut disclosure = Disclosure::uncontrolled();
    assert!(disclosure.open());
    assert!(disclosure.close());
}

#[test]
fn test_toggle_flips_state() {
    let (mut disclosure, opened, closed) = with_counters(None);
    disclosure.toggle();
    assert!(disclosure.is_open());
    disclosure.toggle();
    assert!(!disclosure.is_open());
    assert_eq!((opened.get(), closed.get()), (1, 1));
}

#[test]
fn test_controlled_open_only_forwards() {
    let (mut disclosure, opened, closed) = with_counters(Some(false));

    assert!(disclosure.is_controlled());
    assert!(disclosure.open());
    assert!(!disclosure.is_open());
    assert!(disclosure.open());
    assert_eq!(opened.get(), 2);

    disclosure.close();
    assert_eq!(closed.get(), 1);
}

#[test]
fn test_controlled_value_comes_from_owner() {
    let (mut disclosure, _, _) = with_counters(Some(false));

    disclosure.set_controlled_open(true);
    assert!(disclosure.is_open());

    disclosure.close();
    assert!(disclosure.is_open());

    disclosure.set_controlled_open(false);
    assert!(!disclosure.is_open());
}

#[test]
fn test_set_controlled_open_ignored_when_owned() {
    let mut disclosure = Disclosure::uncontrolled();
    disclosure.set_controlled_open(true);
    assert!(!disclosure.is_open());
}

#[test]
fn test_begin_open_defers_callback_until_run() {
    let (mut disclosure, opened, _) = with_counters(None);

    let notify = disclosure.begin_open();
    assert!(disclosure.is_open());
    assert_eq!(opened.get(), 0);

    if let Some(notify) = notify {
        notify.run();
    }
    assert_eq!(opened.get(), 1);
    assert!(disclosure.begin_open().is_none());
}

#[test]
fn test_callback_triggered_from_itself_is_skipped() {
    let count = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<Notify>>> = Rc::new(RefCell::new(None));
    let (sink, inner) = (count.clone(), slot.clone());
    let mut disclosure = Disclosure::new(DisclosureOptions {
        on_open: Some(Box::new(move || {
            sink.set(sink.get() + 1);
            if let Some(again) = inner.borrow_mut().take() {
                again.run();
            }
        })),
        ..Default::default()
    });

    let first = disclosure.begin_open();
    disclosure.close();
    *slot.borrow_mut() = disclosure.begin_open();
    if let Some(first) = first {
        first.run();
    }

    assert_eq!(count.get(), 1);
}

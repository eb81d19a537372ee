//! End-to-end timing scenarios for the hover-intent coordinator

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::disclosure::Disclosure;
use crate::test_utils::test_helpers::{coordinator, entries, event_log, ms, recorded_instance};

#[test]
fn test_pointer_walk_across_two_triggers() {
    let intent = coordinator(200, 200);
    let log = event_log();
    let (a, _a_held) = recorded_instance(&intent, "A", &log);
    let (b, _b_held) = recorded_instance(&intent, "B", &log);
    let timeline = intent.timeline().clone();

    intent.request_show(&a);
    assert_eq!(intent.pending_show().map(|p| p.fire_at()), Some(ms(200)));

    timeline.advance_to(ms(250));
    intent.request_hide(&a);
    assert_eq!(intent.pending_hide().map(|p| p.fire_at()), Some(ms(450)));

    timeline.advance_to(ms(300));
    intent.request_show(&b);
    assert!(intent.pending_hide().is_none());
    assert!(intent.pending_show().is_none());

    timeline.advance_to(ms(600));
    intent.request_hide(&b);

    timeline.advance_to(ms(2000));

    assert_eq!(
        entries(&log),
        vec![
            ("open", "A".to_string(), 200),
            ("close", "A".to_string(), 300),
            ("open", "B".to_string(), 300),
            ("close", "B".to_string(), 800),
        ]
    );
}

// The fast-path fires for any pending hide, however far apart the two
// triggers are on screen.
#[test]
fn test_pending_hide_gives_unrelated_trigger_instant_show() {
    let intent = coordinator(200, 500);
    let log = event_log();
    let (near, _near_held) = recorded_instance(&intent, "near", &log);
    let (far, _far_held) = recorded_instance(&intent, "far", &log);

    intent.request_show(&near);
    intent.timeline().advance_to(ms(200));
    intent.request_hide(&near);
    intent.timeline().advance_to(ms(210));
    intent.request_show(&far);

    assert_eq!(
        entries(&log),
        vec![
            ("open", "near".to_string(), 200),
            ("close", "near".to_string(), 210),
            ("open", "far".to_string(), 210),
        ]
    );
    assert_eq!(intent.active(), Some(far));
    assert!(intent.timeline().is_idle());
}

#[test]
fn test_show_hide_show_before_timers_leaves_one_show() {
    let intent = coordinator(200, 200);
    let log = event_log();
    let (a, _a_held) = recorded_instance(&intent, "A", &log);

    intent.request_show(&a);
    intent.request_hide(&a);
    intent.request_show(&a);

    assert_eq!(intent.timeline().pending_count(), 1);
    assert!(matches!(intent.pending_for(&a), PendingOp::Show(_)));
    assert!(intent.pending_hide().is_none());

    intent.timeline().advance_to(ms(1000));
    assert_eq!(entries(&log), vec![("open", "A".to_string(), 200)]);
}

#[test]
fn test_hide_immediate_closes_and_cancels_everything() {
    let intent = coordinator(200, 200);
    let log = event_log();
    let (a, disclosure) = recorded_instance(&intent, "A", &log);
    let (b, _b_held) = recorded_instance(&intent, "B", &log);

    intent.request_show(&a);
    intent.timeline().advance_to(ms(200));
    intent.request_hide(&a);
    intent.request_show_after(&b, ms(0));
    intent.request_show(&a);

    intent.request_hide_immediate(&a);

    assert!(!disclosure.borrow().is_open());
    assert!(intent.timeline().is_idle());
    assert!(intent.pending_show().is_none());
    assert!(intent.pending_hide().is_none());
    assert_eq!(intent.active(), None);
}

#[test]
fn test_hide_immediate_while_show_pending_never_opens() {
    let intent = coordinator(200, 200);
    let log = event_log();
    let (a, _a_held) = recorded_instance(&intent, "A", &log);

    intent.request_show(&a);
    intent.request_hide_immediate(&a);
    intent.timeline().advance_to(ms(1000));

    assert!(entries(&log).is_empty());
}

#[test]
fn test_release_with_pending_show_never_touches_instance() {
    let intent = coordinator(200, 200);
    let log = event_log();
    let (a, disclosure) = recorded_instance(&intent, "A", &log);

    intent.request_show(&a);
    intent.release(&a);
    intent.timeline().advance_to(ms(1000));

    assert!(!disclosure.borrow().is_open());
    assert!(entries(&log).is_empty());
    assert_eq!(intent.active(), None);
}

#[test]
fn test_release_with_pending_hide_never_touches_instance() {
    let intent = coordinator(0, 200);
    let log = event_log();
    let (a, disclosure) = recorded_instance(&intent, "A", &log);

    intent.request_show(&a);
    intent.request_hide(&a);
    intent.release(&a);
    intent.timeline().advance_to(ms(1000));

    assert!(disclosure.borrow().is_open());
    assert_eq!(entries(&log), vec![("open", "A".to_string(), 0)]);
    assert_eq!(intent.visible(), None);
}

#[derive(Debug, Clone)]
enum Step {
    Show(usize),
    Hide(usize),
    HideImmediate(usize),
    Wait(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..4).prop_map(Step::Show),
        (0usize..4).prop_map(Step::Hide),
        (0usize..4).prop_map(Step::HideImmediate),
        (0u64..400).prop_map(Step::Wait),
    ]
}

fn open_count(instances: &[(TooltipId, Rc<RefCell<Disclosure>>)]) -> usize {
    instances
        .iter()
        .filter(|(_, disclosure)| disclosure.borrow().is_open())
        .count()
}

// For any interleaving of trigger events and elapsed time, at most one
// tooltip is open.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_at_most_one_open(
        show_ms in 0u64..300,
        hide_ms in 0u64..300,
        steps in prop::collection::vec(step(), 1..60),
    ) {
        let intent = coordinator(show_ms, hide_ms);
        let log = event_log();
        let instances: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|id| recorded_instance(&intent, id, &log))
            .collect();

        for step in steps {
            match step {
                Step::Show(i) => intent.request_show(&instances[i].0),
                Step::Hide(i) => intent.request_hide(&instances[i].0),
                Step::HideImmediate(i) => intent.request_hide_immediate(&instances[i].0),
                Step::Wait(delta) => {
                    // Step through every deadline so each intermediate state is checked
                    let target = intent.timeline().now() + ms(delta);
                    while let Some(deadline) = intent.timeline().next_deadline() {
                        if deadline > target {
                            break;
                        }
                        intent.timeline().advance_to(deadline);
                        prop_assert!(open_count(&instances) <= 1);
                    }
                    intent.timeline().advance_to(target);
                }
            }
            prop_assert!(open_count(&instances) <= 1);
            prop_assert!(intent.pending_show().is_none_or(|p| p.is_pending()));
            prop_assert!(intent.pending_hide().is_none_or(|p| p.is_pending()));
        }
    }

    #[test]
    fn prop_callbacks_alternate_per_instance(
        steps in prop::collection::vec(step(), 1..60),
    ) {
        let intent = coordinator(200, 200);
        let log = event_log();
        let ids = ["A", "B", "C", "D"];
        let instances: Vec<_> = ids
            .iter()
            .map(|id| recorded_instance(&intent, id, &log))
            .collect();

        for step in steps {
            match step {
                Step::Show(i) => intent.request_show(&instances[i].0),
                Step::Hide(i) => intent.request_hide(&instances[i].0),
                Step::HideImmediate(i) => intent.request_hide_immediate(&instances[i].0),
                Step::Wait(delta) => {
                    intent.timeline().advance_by(ms(delta));
                }
            }
        }

        for id in ids {
            let kinds: Vec<_> = entries(&log)
                .into_iter()
                .filter(|(_, who, _)| who == id)
                .map(|(kind, _, _)| kind)
                .collect();
            for (index, kind) in kinds.iter().enumerate() {
                let expected = if index % 2 == 0 { "open" } else { "close" };
                prop_assert_eq!(*kind, expected);
            }
        }
    }
}

use crate::{
    DragToCloseGesture, GestureConfig, Orientation, PointerEvent, PointerEventKind,
    ResolvedOutcome, SharedGestureConfig, Size,
};

const PANEL: Size = Size::new(600.0, 800.0);

fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(kind, x, y)
}

fn gesture(config: GestureConfig) -> (DragToCloseGesture, SharedGestureConfig) {
    let shared = config.shared();
    (DragToCloseGesture::new(shared.clone()), shared)
}

#[test]
fn press_never_intercepts() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    assert!(!gesture.should_intercept(&event(PointerEventKind::Down, 10.0, 10.0)));
    assert!(gesture.session().is_some());
    assert!(!gesture.is_intercepted());
}

#[test]
fn release_never_intercepts() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));
    assert!(!gesture.should_intercept(&event(PointerEventKind::Up, 0.0, 500.0)));
    assert!(!gesture.should_intercept(&event(PointerEventKind::Cancel, 0.0, 500.0)));
}

#[test]
fn unclaimed_stream_ends_its_session() {
    for end in [PointerEventKind::Up, PointerEventKind::Cancel] {
        let (mut gesture, _) = gesture(GestureConfig::default());
        gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));
        assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 30.0, 5.0)));
        gesture.should_intercept(&event(end, 30.0, 5.0));
        assert!(gesture.session().is_none(), "{end:?} must end the session");
        assert_eq!(
            gesture.handle_move(&event(PointerEventKind::Move, 0.0, 400.0)),
            None,
            "no origin survives into the gap between streams"
        );
    }
}

#[test]
fn next_stream_measures_from_its_own_press() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));
    gesture.should_intercept(&event(PointerEventKind::Up, 0.0, 0.0));

    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 500.0));
    assert!(gesture.should_intercept(&event(PointerEventKind::Move, 0.0, 510.0)));
    assert_eq!(
        gesture.handle_move(&event(PointerEventKind::Move, 0.0, 510.0)),
        Some(5.0)
    );
}

#[test]
fn axis_dominant_move_intercepts() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.should_intercept(&event(PointerEventKind::Down, 100.0, 100.0));
    assert!(
        !gesture.should_intercept(&event(PointerEventKind::Move, 110.0, 105.0)),
        "cross-axis dominant small move stays with descendants"
    );
    assert!(gesture.should_intercept(&event(PointerEventKind::Move, 104.0, 106.0)));
}

#[test]
fn long_move_intercepts_even_when_cross_axis_dominates() {
    let (mut gesture, _) = gesture(GestureConfig::default().with_touch_slop(10.0));
    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));
    assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 100.0, 29.0)));
    assert!(gesture.should_intercept(&event(PointerEventKind::Move, 100.0, 30.0)));
}

#[test]
fn horizontal_orientation_uses_x_axis() {
    let (mut gesture, _) =
        gesture(GestureConfig::default().with_orientation(Orientation::Horizontal));
    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));
    assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 2.0, 8.0)));
    assert!(gesture.should_intercept(&event(PointerEventKind::Move, 9.0, 8.0)));
    assert_eq!(
        gesture.handle_move(&event(PointerEventKind::Move, 300.0, 8.0)),
        Some(150.0)
    );
    // Width is the extent: 600 / 4 = 150, so 150 is not past it.
    assert_eq!(gesture.handle_release(PANEL), ResolvedOutcome::Open);
}

#[test]
fn interception_latches_for_the_rest_of_the_stream() {
    let (mut gesture, _) = gesture(GestureConfig::default().with_touch_slop(5.0));
    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));

    let samples = [(1.0, 0.0), (2.0, 3.0), (0.0, 16.0), (40.0, 2.0), (80.0, 1.0)];
    let mut latched_at = None;
    for (index, (x, y)) in samples.into_iter().enumerate() {
        let intercepted = gesture.should_intercept(&event(PointerEventKind::Move, x, y));
        if let Some(first) = latched_at {
            assert!(intercepted, "sample {index} after latch at {first} must stay intercepted");
        } else if intercepted {
            latched_at = Some(index);
        }
    }
    assert_eq!(latched_at, Some(1));
}

#[test]
fn friction_attenuates_finger_travel() {
    for friction in [1.5_f32, 2.0, 3.0, 10.0] {
        let mut config = GestureConfig::default();
        config.set_friction(friction).expect("valid friction");
        let (mut gesture, _) = gesture(config);
        gesture.press(&event(PointerEventKind::Down, 0.0, 0.0));
        for raw in [1.0_f32, 37.0, 500.0] {
            let offset = gesture
                .handle_move(&event(PointerEventKind::Move, 0.0, raw))
                .expect("forward drag applies");
            assert!(offset < raw, "friction {friction} must attenuate {raw}");
            assert_eq!(offset, raw / friction);
        }
    }
}

#[test]
fn reverse_travel_keeps_last_positive_offset() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.press(&event(PointerEventKind::Down, 0.0, 100.0));

    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 300.0)), Some(100.0));
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 100.0)), None);
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 20.0)), None);
    assert_eq!(gesture.current_offset(), 100.0);

    // Still forward of the press: the panel follows the finger back.
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 160.0)), Some(30.0));
    assert!(gesture.current_offset() >= 0.0);
}

#[test]
fn release_past_threshold_closes() {
    // 500 / 2 = 250 > 800 / 4 = 200.
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.press(&event(PointerEventKind::Down, 0.0, 0.0));
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 500.0)), Some(250.0));
    assert_eq!(gesture.handle_release(PANEL), ResolvedOutcome::Close);
    assert!(gesture.session().is_none(), "release discards the session");
}

#[test]
fn release_short_of_threshold_opens() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.press(&event(PointerEventKind::Down, 0.0, 0.0));
    gesture.handle_move(&event(PointerEventKind::Move, 0.0, 300.0));
    assert_eq!(gesture.current_offset(), 150.0);
    assert_eq!(gesture.handle_release(PANEL), ResolvedOutcome::Open);
}

#[test]
fn release_exactly_at_threshold_opens() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.press(&event(PointerEventKind::Down, 0.0, 0.0));
    gesture.handle_move(&event(PointerEventKind::Move, 0.0, 400.0));
    assert_eq!(gesture.current_offset(), 200.0);
    assert_eq!(gesture.handle_release(PANEL), ResolvedOutcome::Open);
}

#[test]
fn disabled_drag_never_intercepts() {
    let mut config = GestureConfig::default();
    config.set_drag_enabled(false);
    let (mut gesture, _) = gesture(config);

    assert!(!gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0)));
    for y in [10.0, 100.0, 1_000.0, 10_000.0] {
        assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 0.0, y)));
        assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, y)), None);
    }
    assert!(!gesture.should_intercept(&event(PointerEventKind::Up, 0.0, 10_000.0)));
}

#[test]
fn unrecognized_orientation_disables_drag_on_first_move() {
    let mut config = GestureConfig::default();
    config.set_orientation_raw(5);
    let (mut gesture, shared) = gesture(config);

    gesture.should_intercept(&event(PointerEventKind::Down, 0.0, 0.0));
    assert!(shared.borrow().drag_enabled(), "press alone does not inspect the axis");

    assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 0.0, 400.0)));
    assert!(!shared.borrow().drag_enabled());
    assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 0.0, 800.0)));
}

#[test]
fn friction_change_applies_from_next_move() {
    let (mut gesture, shared) = gesture(GestureConfig::default());
    gesture.press(&event(PointerEventKind::Down, 0.0, 0.0));
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 200.0)), Some(100.0));

    shared.borrow_mut().set_friction(4.0).expect("valid friction");
    assert_eq!(
        gesture.current_offset(),
        100.0,
        "already applied offset is not rewritten"
    );
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 200.0)), Some(50.0));
}

#[test]
fn move_without_press_is_ignored() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    assert!(!gesture.should_intercept(&event(PointerEventKind::Move, 0.0, 500.0)));
    assert_eq!(gesture.handle_move(&event(PointerEventKind::Move, 0.0, 500.0)), None);
    assert_eq!(gesture.handle_release(PANEL), ResolvedOutcome::Open);
}

#[test]
fn cancel_discards_session_and_snaps_back() {
    let (mut gesture, _) = gesture(GestureConfig::default());
    gesture.press(&event(PointerEventKind::Down, 0.0, 0.0));
    gesture.handle_move(&event(PointerEventKind::Move, 0.0, 700.0));
    assert_eq!(gesture.cancel(), ResolvedOutcome::Open);
    assert_eq!(gesture.current_offset(), 0.0);
}

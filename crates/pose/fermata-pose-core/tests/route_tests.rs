use fermata_pose_core::{
    parse_route_json, HoldId, HoldType, Limb, RouteAnnotation, RouteDataError,
};

/// it should allocate monotonic ids and select the newly placed hold
#[test]
fn add_hold_allocates_and_selects() {
    let mut route = RouteAnnotation::new();
    let a = route.add_hold(0.1, 0.2);
    let b = route.add_hold(0.3, 0.4);
    assert_eq!(a, HoldId(0));
    assert_eq!(b, HoldId(1));
    assert_eq!(route.selected(), Some(b));
    assert_eq!(route.holds().len(), 2);
    assert_eq!(route.holds()[0].kind, HoldType::ClimbingHold);
}

/// it should not reuse an id after the hold is removed
#[test]
fn removed_ids_are_not_reused() {
    let mut route = RouteAnnotation::new();
    let a = route.add_hold(0.1, 0.1);
    route.toggle_select(Some(a));
    route.remove_selected();
    let b = route.add_hold(0.2, 0.2);
    assert_ne!(a, b);
    assert_eq!(b, HoldId(1));
}

/// it should toggle selection off when the same hold is selected twice
#[test]
fn selecting_twice_deselects() {
    let mut route = RouteAnnotation::new();
    let a = route.add_hold(0.5, 0.5);
    route.toggle_select(None);
    assert_eq!(route.selected(), None);
    route.toggle_select(Some(a));
    assert_eq!(route.selected(), Some(a));
    route.toggle_select(Some(a));
    assert_eq!(route.selected(), None);
}

/// it should keep at most one finish hold, demoting the previous one
#[test]
fn finish_hold_is_unique() {
    let mut route = RouteAnnotation::new();
    let a = route.add_hold(0.2, 0.2);
    route.assign_type(HoldType::FinishHold);
    assert_eq!(route.finish_hold(), Some(a));

    let b = route.add_hold(0.8, 0.1);
    route.assign_type(HoldType::FinishHold);
    assert_eq!(route.finish_hold(), Some(b));

    let kinds: Vec<HoldType> = route.holds().iter().map(|h| h.kind).collect();
    assert_eq!(kinds, vec![HoldType::ClimbingHold, HoldType::FinishHold]);
}

/// it should type a generic hold by the limb assigned to it, and leave an
/// already typed hold alone (a hold can serve hand and foot at once)
#[test]
fn assign_limb_sets_start_state_and_type() {
    let mut route = RouteAnnotation::new();
    let a = route.add_hold(0.4, 0.7);
    route.assign_limb(Limb::RightHand);
    assert_eq!(route.start_state().right_hand, Some(a));
    assert_eq!(route.holds()[0].kind, HoldType::StartHand);
    assert_eq!(route.selected(), None);

    // Same hold also carries a foot; type stays StartHand.
    route.toggle_select(Some(a));
    route.assign_limb(Limb::LeftFoot);
    assert_eq!(route.start_state().left_foot, Some(a));
    assert_eq!(route.holds()[0].kind, HoldType::StartHand);
}

/// it should clear every reference when the selected hold is removed
#[test]
fn remove_clears_references() {
    let mut route = RouteAnnotation::new();
    let a = route.add_hold(0.3, 0.3);
    route.assign_limb(Limb::LeftHand);
    route.toggle_select(Some(a));
    route.assign_type(HoldType::FinishHold);

    route.toggle_select(Some(a));
    route.remove_selected();
    assert!(route.holds().is_empty());
    assert_eq!(route.start_state().left_hand, None);
    assert_eq!(route.finish_hold(), None);
    assert_eq!(route.selected(), None);
}

/// it should return to the empty annotation on reset
#[test]
fn reset_clears_everything() {
    let mut route = RouteAnnotation::new();
    route.add_hold(0.1, 0.1);
    route.add_hold(0.2, 0.2);
    route.reset();
    assert!(route.holds().is_empty());
    assert_eq!(route.selected(), None);
    assert_eq!(route.finish_hold(), None);
    assert_eq!(route.add_hold(0.5, 0.5), HoldId(0));
}

/// it should parse and validate the stored route wire format
#[test]
fn stored_route_parses() {
    let json = r#"{
        "holds": [
            {"id": 0, "xNorm": 0.3, "yNorm": 0.9, "type": "start_hand"},
            {"id": 1, "xNorm": 0.4, "yNorm": 0.95, "type": "start_foot"},
            {"id": 2, "xNorm": 0.5, "yNorm": 0.1, "type": "finish_hold"}
        ],
        "start": {"RH": 0, "LH": 0, "RF": 1, "LF": null},
        "finish": 2
    }"#;
    let route = parse_route_json(json).unwrap();
    assert_eq!(route.holds.len(), 3);
    assert_eq!(route.start.right_hand, Some(HoldId(0)));
    assert_eq!(route.start.left_foot, None);
    assert_eq!(route.finish, HoldId(2));
}

/// it should reject a finish id that names no hold
#[test]
fn stored_route_rejects_unknown_finish() {
    let json = r#"{
        "holds": [{"id": 0, "xNorm": 0.3, "yNorm": 0.9, "type": "start_hand"}],
        "start": {"RH": 0, "LH": null, "RF": null, "LF": null},
        "finish": 9
    }"#;
    match parse_route_json(json) {
        Err(RouteDataError::UnknownReference("finish", HoldId(9))) => {}
        other => panic!("expected unknown finish reference, got {other:?}"),
    }
}

/// it should reject out-of-range normalized coordinates and duplicate ids
#[test]
fn stored_route_rejects_bad_holds() {
    let out_of_range = r#"{
        "holds": [{"id": 0, "xNorm": 1.5, "yNorm": 0.5, "type": "climbing_hold"}],
        "start": {"RH": null, "LH": null, "RF": null, "LF": null},
        "finish": 0
    }"#;
    assert!(matches!(
        parse_route_json(out_of_range),
        Err(RouteDataError::PositionOutOfRange(HoldId(0), _, _))
    ));

    let duplicate = r#"{
        "holds": [
            {"id": 0, "xNorm": 0.5, "yNorm": 0.5, "type": "climbing_hold"},
            {"id": 0, "xNorm": 0.6, "yNorm": 0.6, "type": "finish_hold"}
        ],
        "start": {"RH": null, "LH": null, "RF": null, "LF": null},
        "finish": 0
    }"#;
    assert!(matches!(
        parse_route_json(duplicate),
        Err(RouteDataError::DuplicateHold(HoldId(0)))
    ));
}

/// it should reject two finish-typed holds
#[test]
fn stored_route_rejects_double_finish() {
    let json = r#"{
        "holds": [
            {"id": 0, "xNorm": 0.5, "yNorm": 0.5, "type": "finish_hold"},
            {"id": 1, "xNorm": 0.6, "yNorm": 0.6, "type": "finish_hold"}
        ],
        "start": {"RH": null, "LH": null, "RF": null, "LF": null},
        "finish": 0
    }"#;
    assert!(matches!(
        parse_route_json(json),
        Err(RouteDataError::MultipleFinishHolds(HoldId(0), HoldId(1)))
    ));
}

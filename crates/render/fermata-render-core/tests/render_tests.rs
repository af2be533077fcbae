use fermata_render_core::{Color, PixmapSurface, RenderError, SequenceRenderer, StepLabeling};
use fermata_pose_core::{ClimberState, Hold, HoldId, HoldType};
use tiny_skia::Pixmap;

fn hold(id: u32, x: f32, y: f32, kind: HoldType) -> Hold {
    Hold::new(HoldId(id), x, y, kind)
}

/// it should draw a type-colored marker at the hold's pixel position
#[test]
fn hold_markers_are_drawn() {
    let mut surface = PixmapSurface::new(200, 200).unwrap();
    let renderer = SequenceRenderer::default();
    let holds = [hold(1, 0.8, 0.8, HoldType::ClimbingHold)];

    renderer.render_state(&mut surface, &holds, &ClimberState::default(), 0);
    assert_eq!(surface.pixel(160, 160), Some(Color::CLIMBING_HOLD));
}

/// it should stroke the skeleton over the markers, with the hand on its hold
#[test]
fn skeleton_reaches_hold() {
    let mut surface = PixmapSurface::new(200, 200).unwrap();
    let renderer = SequenceRenderer::default();
    let holds = [
        hold(1, 0.8, 0.2, HoldType::StartHand),
        hold(2, 0.2, 0.2, HoldType::StartHand),
    ];
    let state = ClimberState {
        right_hand: Some(HoldId(1)),
        left_hand: Some(HoldId(2)),
        ..Default::default()
    };

    renderer.render_state(&mut surface, &holds, &state, 0);
    assert!(has_color_near(&surface, 160, 40, Color::SKELETON));
    assert!(has_color_near(&surface, 40, 40, Color::SKELETON));
}

/// Scan a small window around (x, y) for an exactly matching pixel;
/// anti-aliasing blends stroke edges, so single-pixel probes are too
/// strict for IK-placed endpoints.
fn has_color_near(surface: &PixmapSurface, x: u32, y: u32, color: Color) -> bool {
    let (x, y) = (x as i64, y as i64);
    for dy in -3..=3 {
        for dx in -3..=3 {
            let (px, py) = (x + dx, y + dy);
            if px < 0 || py < 0 {
                continue;
            }
            if surface.pixel(px as u32, py as u32) == Some(color) {
                return true;
            }
        }
    }
    false
}

/// it should fully clear the previous frame before drawing the next one
#[test]
fn frames_do_not_ghost() {
    let mut surface = PixmapSurface::new(200, 200).unwrap();
    let renderer = SequenceRenderer::default();
    let holds = [hold(1, 0.8, 0.8, HoldType::FinishHold)];

    renderer.render_state(&mut surface, &holds, &ClimberState::default(), 0);
    assert_eq!(surface.pixel(160, 160), Some(Color::FINISH_HOLD));

    // Next frame has no holds; the marker must be gone.
    renderer.render_state(&mut surface, &[], &ClimberState::default(), 1);
    assert_eq!(surface.pixel(160, 160), Some(Color::BACKGROUND));
}

/// it should restore the wall image on clear when a background is set
#[test]
fn background_survives_clearing() {
    let mut surface = PixmapSurface::new(64, 64).unwrap();
    let mut wall = Pixmap::new(64, 64).unwrap();
    wall.fill(tiny_skia::Color::from_rgba8(10, 20, 30, 255));
    surface.set_background(wall).unwrap();

    let renderer = SequenceRenderer::default();
    renderer.render_state(&mut surface, &[], &ClimberState::default(), 0);
    assert_eq!(surface.pixel(60, 60), Some(Color::rgb(10, 20, 30)));
}

/// it should reject a background whose dimensions differ from the surface
#[test]
fn background_size_must_match() {
    let mut surface = PixmapSurface::new(100, 100).unwrap();
    let wall = Pixmap::new(50, 80).unwrap();
    match surface.set_background(wall) {
        Err(RenderError::BackgroundSize {
            expected_w: 100,
            expected_h: 100,
            actual_w: 50,
            actual_h: 80,
        }) => {}
        other => panic!("expected size mismatch, got {other:?}"),
    }
}

/// it should reject zero-sized surfaces
#[test]
fn zero_dimensions_are_invalid() {
    assert!(matches!(
        PixmapSurface::new(0, 100),
        Err(RenderError::InvalidDimensions { .. })
    ));
}

/// it should visit every state in order and let the sink stop iteration
#[test]
fn sequence_sink_ordering_and_early_stop() {
    let mut surface = PixmapSurface::new(120, 120).unwrap();
    let renderer = SequenceRenderer::default();
    let holds = [hold(1, 0.5, 0.9, HoldType::StartFoot)];
    let state = ClimberState {
        right_foot: Some(HoldId(1)),
        ..Default::default()
    };
    let sequence = vec![state, state, state];

    let mut visited = Vec::new();
    renderer.render_sequence(&mut surface, &holds, &sequence, |i, _s| {
        visited.push(i);
        true
    });
    assert_eq!(visited, vec![0, 1, 2]);

    visited.clear();
    renderer.render_sequence(&mut surface, &holds, &sequence, |i, _s| {
        visited.push(i);
        false
    });
    assert_eq!(visited, vec![0]);
}

/// it should hold one numbering convention fixed across a run
#[test]
fn step_labeling_conventions() {
    assert_eq!(StepLabeling::OneBased.label(0), "Step 1");
    assert_eq!(StepLabeling::OneBased.label(4), "Step 5");
    assert_eq!(StepLabeling::ZeroBased.label(0), "Step 0");
    assert_eq!(StepLabeling::ZeroBased.label(4), "Step 4");
    assert_eq!(StepLabeling::default(), StepLabeling::OneBased);
}

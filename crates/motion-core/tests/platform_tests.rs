// Host-side tests for the platform ring-drawing animation.

use motion_core::{PlatformGraphic, RoundedRect};

const EPS: f64 = 1e-9;

#[test]
fn drawing_uses_first_seventy_percent_of_section() {
    let g = PlatformGraphic::default();
    assert_eq!(g.drawing_progress(0.0), 0.0);
    assert_eq!(g.drawing_progress(0.35), 0.5);
    assert_eq!(g.drawing_progress(0.7), 1.0);
    assert_eq!(g.drawing_progress(1.0), 1.0);
}

#[test]
fn rings_draw_one_after_another() {
    let g = PlatformGraphic::default();
    let frame = g.frame(0.35); // drawing progress 0.5

    assert_eq!(frame.rings.len(), 3);
    assert_eq!(frame.rings[0].progress, 1.0);
    assert!((frame.rings[1].progress - 0.5).abs() < EPS);
    assert_eq!(frame.rings[2].progress, 0.0);
    assert!(!frame.is_drawn());
}

#[test]
fn dash_offsets_hide_undrawn_length() {
    let g = PlatformGraphic::default();

    let start = g.frame(0.0);
    let dashes: Vec<f64> = start.rings.iter().map(|r| r.dash_offset).collect();
    assert_eq!(dashes, vec![1520.0, 1280.0, 1040.0]);

    let done = g.frame(0.8);
    assert!(done.rings.iter().all(|r| r.dash_offset == 0.0));
    assert!(done.is_drawn());

    let mid = g.frame(0.35);
    assert_eq!(mid.rings[0].dash_offset, 0.0);
    assert!((mid.rings[1].dash_offset - 640.0).abs() < 1e-6);
    assert_eq!(mid.rings[2].dash_offset, 1040.0);
}

#[test]
fn tracers_hidden_at_ring_ends() {
    let g = PlatformGraphic::default();
    let frame = g.frame(0.35);
    assert!(frame.rings[0].tracer.is_none());
    assert!(frame.rings[1].tracer.is_some());
    assert!(frame.rings[2].tracer.is_none());

    assert!(g.frame(0.0).rings.iter().all(|r| r.tracer.is_none()));
    assert!(g.frame(1.0).rings.iter().all(|r| r.tracer.is_none()));
}

#[test]
fn tracer_sits_on_the_outline() {
    let g = PlatformGraphic::default();
    let frame = g.frame(0.35);
    let tracer = frame.rings[1].tracer.unwrap();
    // middle ring: 230x410 at (35, 45); 640 units in lands on the bottom edge
    assert!((tracer.y - 455.0).abs() < 1e-6, "got {:?}", tracer);
    assert!(tracer.x > 43.0 && tracer.x < 257.0);
}

#[test]
fn outline_walk_follows_path_order() {
    let r = RoundedRect::centered(280.0, 480.0, 8.0);
    assert_eq!((r.x, r.y), (10.0, 10.0));

    let p0 = r.point_at_length(0.0);
    assert!((p0.x - 18.0).abs() < EPS && (p0.y - 10.0).abs() < EPS);

    // end of the top edge
    let p1 = r.point_at_length(264.0);
    assert!((p1.x - 282.0).abs() < EPS && (p1.y - 10.0).abs() < EPS);

    // halfway round the top-right corner stays on the corner circle
    let quarter = std::f64::consts::FRAC_PI_2 * 8.0;
    let p2 = r.point_at_length(264.0 + quarter / 2.0);
    let centre = glam::DVec2::new(282.0, 18.0);
    assert!(((p2 - centre).length() - 8.0).abs() < 1e-9);
    assert!(p2.x > 282.0 && p2.y < 18.0);

    // past the end clamps back to the start point
    let end = r.point_at_length(1e9);
    assert!((end.x - 18.0).abs() < 1e-9 && (end.y - 10.0).abs() < 1e-9);
}

#[test]
fn outline_is_shorter_than_dash_length() {
    let r = RoundedRect::centered(180.0, 340.0, 8.0);
    assert_eq!(r.dash_length(), 1040.0);
    assert!(r.outline_length() < r.dash_length());
}

#[test]
fn path_starts_after_top_left_corner() {
    let r = RoundedRect::centered(280.0, 480.0, 8.0);
    let d = r.path_d();
    assert!(d.starts_with("M18,10 H282 A8,8 0 0 1 290,18 V482"), "{}", d);
    assert!(d.ends_with("A8,8 0 0 1 18,10 Z"), "{}", d);
}

#[test]
fn custom_drawing_window() {
    let g = PlatformGraphic::default().with_drawing_window(0.2, 0.6);
    assert_eq!(g.drawing_progress(0.2), 0.0);
    assert!((g.drawing_progress(0.4) - 0.5).abs() < EPS);
    assert!(g.frame(0.6).is_drawn());
    assert_eq!(g.rings().len(), 3);
}

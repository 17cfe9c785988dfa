// Host-side tests for configuration defaults and validation.

use motion_core::constants::*;
use motion_core::{MotionConfig, MotionError};

#[test]
fn defaults_match_constants_and_validate() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.glow.smoothing, GLOW_SMOOTHING);
    assert_eq!(cfg.glow.radius_idle, 600.0);
    assert_eq!(cfg.glow.radius_pressed, 450.0);
    assert_eq!(cfg.scroll.scroll_to_top, 300.0);
    assert_eq!(cfg.drawing_end, 0.7);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn smoothing_must_be_strictly_inside_unit_interval() {
    for k in [0.0, 1.0, -0.1, 1.5, f32::NAN] {
        let mut cfg = MotionConfig::default();
        cfg.glow.smoothing = k;
        assert!(
            matches!(cfg.validate(), Err(MotionError::InvalidSmoothing(_))),
            "k={} accepted",
            k
        );
    }
}

#[test]
fn radius_and_thresholds_are_checked() {
    let mut cfg = MotionConfig::default();
    cfg.glow.radius_pressed = 0.0;
    assert_eq!(cfg.validate(), Err(MotionError::InvalidRadius(0.0)));

    let mut cfg = MotionConfig::default();
    cfg.scroll.header_scrolled = -1.0;
    assert_eq!(
        cfg.validate(),
        Err(MotionError::InvalidThreshold {
            name: "header",
            value: -1.0
        })
    );
}

#[test]
fn drawing_window_must_be_non_empty() {
    let mut cfg = MotionConfig::default();
    cfg.drawing_start = 0.5;
    cfg.drawing_end = 0.5;
    assert_eq!(
        cfg.validate(),
        Err(MotionError::EmptyDrawingWindow {
            start: 0.5,
            end: 0.5
        })
    );
}

#[test]
fn ring_and_tracer_ids_are_indexed() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.targets.platform_ring(0), "platform-ring-0");
    assert_eq!(cfg.targets.platform_tracer(2), "platform-tracer-2");
}

#[test]
fn platform_rings_fit_the_view_box() {
    for [w, h] in PLATFORM_RINGS {
        assert!(w > 2.0 * PLATFORM_CORNER_RADIUS && w <= PLATFORM_VIEW_W);
        assert!(h > 2.0 * PLATFORM_CORNER_RADIUS && h <= PLATFORM_VIEW_H);
    }
    assert!(DRAWING_START_PROGRESS < DRAWING_END_PROGRESS);
}

#[test]
fn targets_can_be_overridden_by_name() {
    let mut cfg = MotionConfig::default();
    cfg.targets.set("header", "top-bar").unwrap();
    cfg.targets.set("platform-ring-prefix", "ring-").unwrap();
    assert_eq!(cfg.targets.header, "top-bar");
    assert_eq!(cfg.targets.platform_ring(1), "ring-1");
    assert_eq!(cfg.targets.platform_features, PLATFORM_FEATURES_ID);

    assert_eq!(
        cfg.targets.set("footer", "x"),
        Err(MotionError::UnknownTarget("footer".to_string()))
    );
    assert_eq!(
        cfg.targets.set("glow", "  "),
        Err(MotionError::EmptyTargetId("glow".to_string()))
    );
    assert_eq!(cfg.targets.glow, GLOW_ELEMENT_ID);
}

#[test]
fn reveal_fraction_must_be_a_share() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.reveal_fraction, REVEAL_VISIBLE_FRACTION);
    assert_eq!(cfg.targets.reveal_sections, ["features", "our-work", "clients"]);

    for f in [0.0, 1.5, f64::NAN] {
        let mut cfg = MotionConfig::default();
        cfg.reveal_fraction = f;
        assert!(matches!(
            cfg.validate(),
            Err(MotionError::InvalidRevealFraction(_))
        ));
    }
    let mut cfg = MotionConfig::default();
    cfg.reveal_fraction = 1.0;
    assert_eq!(cfg.validate(), Ok(()));
}

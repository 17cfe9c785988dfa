// Host-side tests for pinned-section scroll progress.

use motion_core::{section_progress, window_progress, SectionGeometry};

fn progress(top: f64, height: f64, viewport: f64) -> f64 {
    section_progress(SectionGeometry::new(top, height, viewport))
}

#[test]
fn three_viewport_section_end_to_end() {
    // 3000px section, 1000px viewport: 2000px of pinned scroll
    assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress(-1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(progress(-2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(progress(-2500.0, 3000.0, 1000.0), 1.0);
    assert_eq!(progress(-4000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn before_the_pin_reads_zero() {
    assert_eq!(progress(400.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn matches_clamped_ratio_for_finite_tops() {
    let distance = 1500.0;
    for i in -40..=40 {
        let top = i as f64 * 97.3;
        let expected = (-top / distance).clamp(0.0, 1.0);
        assert_eq!(progress(top, 2300.0, 800.0), expected, "top={}", top);
    }
}

#[test]
fn short_section_snaps_on_viewport_top() {
    assert_eq!(progress(0.0, 600.0, 1000.0), 1.0);
    assert_eq!(progress(-10.0, 600.0, 1000.0), 1.0);
    assert_eq!(progress(0.5, 600.0, 1000.0), 0.0);
    assert_eq!(progress(300.0, 600.0, 1000.0), 0.0);
}

#[test]
fn exact_viewport_height_does_not_divide_by_zero() {
    let p = progress(-50.0, 1000.0, 1000.0);
    assert!(p.is_finite());
    assert_eq!(p, 1.0);
    assert_eq!(progress(50.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn degenerate_geometry_degrades_to_zero() {
    assert_eq!(progress(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(progress(-100.0, f64::NAN, 1000.0), 0.0);
    assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
    for top in [-1e12, -1.0, 0.0, 1.0, 1e12] {
        for height in [0.0, 1.0, 999.0, 1000.0, 1001.0, 1e9] {
            let p = progress(top, height, 1000.0);
            assert!(p.is_finite() && (0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn window_remaps_and_clamps() {
    assert_eq!(window_progress(0.35, 0.0, 0.7), 0.5);
    assert_eq!(window_progress(0.7, 0.0, 0.7), 1.0);
    assert_eq!(window_progress(0.9, 0.0, 0.7), 1.0);
    assert_eq!(window_progress(-0.2, 0.0, 0.7), 0.0);
}

// Host-side tests for the scroll-linked theme palette.

use motion_core::{
    centering_progress, smoother_step, Palette, SectionGeometry, StyleValue, StyleVar,
    THEME_CHANNELS,
};

fn value(entries: &[(StyleVar, StyleValue)], var: StyleVar) -> StyleValue {
    entries
        .iter()
        .find(|(v, _)| *v == var)
        .map(|(_, value)| *value)
        .unwrap()
}

#[test]
fn smoother_step_fixed_points() {
    assert_eq!(smoother_step(0.0), 0.0);
    assert_eq!(smoother_step(0.5), 0.5);
    assert_eq!(smoother_step(1.0), 1.0);
    assert!(smoother_step(0.25) < 0.25);
    assert!(smoother_step(0.75) > 0.75);
}

#[test]
fn centred_section_reads_one() {
    // 500px section centred in a 1000px viewport
    let g = SectionGeometry::new(250.0, 500.0, 1000.0);
    assert_eq!(centering_progress(g), 1.0);
}

#[test]
fn one_viewport_away_reads_zero_not_negative() {
    // centre at 1500: exactly one viewport height below the viewport centre
    let g = SectionGeometry::new(1250.0, 500.0, 1000.0);
    assert_eq!(centering_progress(g), 0.0);
    let further = SectionGeometry::new(4000.0, 500.0, 1000.0);
    assert_eq!(centering_progress(further), 0.0);
    let above = SectionGeometry::new(-3000.0, 500.0, 1000.0);
    assert_eq!(centering_progress(above), 0.0);
}

#[test]
fn falls_off_linearly_with_distance() {
    // centre 250px from viewport centre
    let g = SectionGeometry::new(500.0, 500.0, 1000.0);
    assert!((centering_progress(g) - 0.75).abs() < 1e-12);
}

#[test]
fn zero_viewport_is_safe() {
    let g = SectionGeometry::new(0.0, 0.0, 0.0);
    assert_eq!(centering_progress(g), 0.0);
}

#[test]
fn endpoints_are_exact_start_and_end() {
    let palette = Palette::default();
    let dark = palette.at_eased(0.0);
    let light = palette.at_eased(1.0);
    for channel in THEME_CHANNELS.iter() {
        let (start, end) = match (value(&dark, channel.var), value(&light, channel.var)) {
            (StyleValue::Grey(a), StyleValue::Grey(b)) => (a as f64, b as f64),
            (StyleValue::Number(a), StyleValue::Number(b)) => (a, b),
            other => panic!("unexpected values {:?}", other),
        };
        assert_eq!(start, channel.start, "{:?}", channel.var);
        assert_eq!(end, channel.end, "{:?}", channel.var);
    }
}

#[test]
fn far_section_gives_dark_theme() {
    let palette = Palette::default();
    let out = palette.evaluate(SectionGeometry::new(3000.0, 800.0, 1000.0));
    assert_eq!(value(&out, StyleVar::MainBgRgb), StyleValue::Grey(13));
    assert_eq!(value(&out, StyleVar::MainTextRgb), StyleValue::Grey(229));
    assert_eq!(value(&out, StyleVar::CardBgAlpha), StyleValue::Number(0.5));
    assert_eq!(value(&out, StyleVar::MouseGlowRgb), StyleValue::Grey(255));
}

#[test]
fn centred_section_gives_light_theme() {
    let palette = Palette::default();
    let out = palette.evaluate(SectionGeometry::new(100.0, 800.0, 1000.0));
    assert_eq!(value(&out, StyleVar::MainBgRgb), StyleValue::Grey(255));
    assert_eq!(value(&out, StyleVar::MainTextRgb), StyleValue::Grey(25));
    assert_eq!(value(&out, StyleVar::CardBorderRgb), StyleValue::Grey(229));
    assert_eq!(value(&out, StyleVar::CardBgAlpha), StyleValue::Number(0.0));
    assert_eq!(value(&out, StyleVar::MouseGlowRgb), StyleValue::Grey(0));
}

#[test]
fn midpoint_rounds_colours_but_not_alpha() {
    let out = Palette::default().at_eased(0.5);
    assert_eq!(value(&out, StyleVar::MainBgRgb), StyleValue::Grey(134));
    assert_eq!(value(&out, StyleVar::MutedTextRgb), StyleValue::Grey(139));
    assert_eq!(value(&out, StyleVar::CardBgAlpha), StyleValue::Number(0.25));
    // 38 + 191 * 0.5 = 133.5 rounds away from zero
    assert_eq!(value(&out, StyleVar::CardBgRgb), StyleValue::Grey(134));
}

#[test]
fn replaying_a_position_replays_the_colours() {
    let palette = Palette::default();
    let g = SectionGeometry::new(321.5, 777.0, 913.0);
    assert_eq!(palette.evaluate(g), palette.evaluate(g));
}

#[test]
fn every_channel_is_published() {
    let out = Palette::default().evaluate(SectionGeometry::new(0.0, 100.0, 1000.0));
    assert_eq!(out.len(), THEME_CHANNELS.len());
    assert!(out.iter().all(|(var, _)| var.css_name().starts_with("--")));
}

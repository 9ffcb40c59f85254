use super::*;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS
}

fn in_gamut(c: ColorTriple) -> bool {
    [c.r, c.g, c.b]
        .iter()
        .all(|&v| (-EPS..=1.0 + EPS).contains(&v))
}

#[test]
fn lum_and_sat_basics() {
    assert!(approx(lum(ColorTriple::new(1.0, 1.0, 1.0)), 1.0));
    assert!(approx(lum(ColorTriple::new(1.0, 0.0, 0.0)), 0.298912));
    assert!(approx(sat(ColorTriple::new(0.8, 0.2, 0.5)), 0.6));
    assert_eq!(sat(ColorTriple::new(0.4, 0.4, 0.4)), 0.0);
}

#[test]
fn set_sat_maps_max_mid_min() {
    let out = set_sat(ColorTriple::new(0.8, 0.5, 0.2), 0.3);
    assert!(approx(out.r, 0.3));
    assert!(approx(out.g, 0.15));
    assert!(approx(out.b, 0.0));
}

#[test]
fn set_sat_treats_tied_channels_together() {
    let out = set_sat(ColorTriple::new(1.0, 1.0, 0.2), 0.5);
    assert_eq!(out, ColorTriple::new(0.5, 0.5, 0.0));

    let out = set_sat(ColorTriple::new(0.1, 0.9, 0.1), 0.4);
    assert_eq!(out, ColorTriple::new(0.0, 0.4, 0.0));
}

#[test]
fn set_sat_of_flat_triple_is_black() {
    let out = set_sat(ColorTriple::new(0.3, 0.3, 0.3), 0.7);
    assert_eq!(out, ColorTriple::new(0.0, 0.0, 0.0));
}

#[test]
fn clip_color_pulls_back_into_gamut_and_keeps_lum() {
    for c in [
        ColorTriple::new(1.2, 0.5, -0.1),
        ColorTriple::new(-0.3, 0.2, 0.4),
        ColorTriple::new(1.5, 0.6, 0.2),
    ] {
        let out = clip_color(c);
        assert!(in_gamut(out), "{out:?}");
        assert!(approx(lum(out), lum(c)), "{c:?} -> {out:?}");
    }
    let inside = ColorTriple::new(0.2, 0.4, 0.6);
    assert_eq!(clip_color(inside), inside);
}

#[test]
fn luminosity_takes_source_lum_and_keeps_backdrop_saturation() {
    let cb = ColorTriple::new(0.6, 0.4, 0.3);
    let cs = ColorTriple::new(0.5, 0.5, 0.5);
    let out = luminosity(cb, cs);
    assert!(approx(lum(out), lum(cs)));
    assert!(approx(sat(out), sat(cb)));
}

#[test]
fn luminosity_stays_in_gamut_for_extreme_inputs() {
    let cb = ColorTriple::new(1.0, 0.0, 0.0);
    for cs in [
        ColorTriple::new(1.0, 1.0, 1.0),
        ColorTriple::new(0.0, 0.0, 0.0),
        ColorTriple::new(0.0, 1.0, 0.5),
    ] {
        let out = luminosity(cb, cs);
        assert!(in_gamut(out), "{out:?}");
        assert!((lum(out) - lum(cs)).abs() < 1e-3);
    }
}

#[test]
fn color_takes_backdrop_lum() {
    let cb = ColorTriple::new(0.5, 0.5, 0.5);
    let cs = ColorTriple::new(0.9, 0.2, 0.1);
    let out = color(cb, cs);
    assert!(approx(lum(out), lum(cb)));
    assert!(in_gamut(out));
}

#[test]
fn hue_of_gray_source_is_gray_at_backdrop_lum() {
    let cb = ColorTriple::new(0.7, 0.2, 0.4);
    let cs = ColorTriple::new(0.3, 0.3, 0.3);
    let out = hue(cb, cs);
    assert!(approx(out.r, out.g));
    assert!(approx(out.g, out.b));
    assert!(approx(lum(out), lum(cb)));
}

#[test]
fn saturation_from_gray_source_desaturates_backdrop() {
    let cb = ColorTriple::new(0.7, 0.2, 0.4);
    let cs = ColorTriple::new(0.6, 0.6, 0.6);
    let out = saturation(cb, cs);
    assert!(approx(sat(out), 0.0));
    assert!(approx(lum(out), lum(cb)));
}

#[test]
fn from_u8_normalizes() {
    let c = ColorTriple::from_u8(255, 0, 51);
    assert_eq!(c, ColorTriple::new(1.0, 0.0, 0.2));
}

use super::*;

fn plane(values: &[u8]) -> Plane {
    Plane::new(values.len() as u32, 1, values.to_vec()).unwrap()
}

#[test]
fn over_alpha_matches_porter_duff() {
    assert_eq!(over_alpha(255, 0), 255.0);
    assert_eq!(over_alpha(0, 0), 0.0);
    assert_eq!(over_alpha(0, 128), 128.0);
    assert_eq!(over_alpha(255, 128), 255.0);
}

#[test]
fn over_mask_on_opaque_backdrop_is_source_alpha() {
    for sa in [0u8, 1, 64, 128, 200, 255] {
        assert_eq!(over_mask(255, sa), sa);
    }
}

#[test]
fn over_mask_on_transparent_backdrop_is_full_or_nothing() {
    assert_eq!(over_mask(0, 0), 0);
    assert_eq!(over_mask(0, 1), 255);
    assert_eq!(over_mask(0, 255), 255);
}

#[test]
fn no_source_alpha_returns_blended_unchanged() {
    let blended = vec![plane(&[1, 2]), plane(&[3, 4])];
    let base_r = plane(&[100, 100]);
    let base_g = plane(&[200, 200]);
    let ba = plane(&[10, 20]);
    let out = composite_planes(
        blended.clone(),
        &[&base_r, &base_g],
        AlphaPair {
            backdrop: Some(&ba),
            source: None,
        },
    );
    assert_eq!(out, blended);
}

#[test]
fn source_alpha_only_masks_towards_backdrop() {
    let blended = vec![plane(&[0, 0, 0])];
    let base = plane(&[255, 255, 255]);
    let sa = plane(&[0, 128, 255]);
    let out = composite_planes(
        blended,
        &[&base],
        AlphaPair {
            backdrop: None,
            source: Some(&sa),
        },
    );
    assert_eq!(out[0].as_bytes(), &[255, 127, 0]);
}

#[test]
fn both_alphas_use_over_mask() {
    let blended = vec![plane(&[0, 0])];
    let base = plane(&[200, 200]);
    let ba = plane(&[255, 0]);
    let sa = plane(&[128, 128]);
    let out = composite_planes(
        blended,
        &[&base],
        AlphaPair {
            backdrop: Some(&ba),
            source: Some(&sa),
        },
    );
    // Opaque backdrop: half-way. Transparent backdrop: the blend wins outright.
    assert_eq!(out[0].as_bytes(), &[100, 0]);
}

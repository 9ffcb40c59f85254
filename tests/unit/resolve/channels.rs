use super::*;

fn raster(layout: Layout, values: &[u8]) -> Raster {
    Raster::filled(layout, 2, 2, values).unwrap()
}

fn first_bytes(pairs: &[PlanePair<'_>]) -> Vec<(u8, u8)> {
    pairs
        .iter()
        .map(|p| (p.backdrop.as_bytes()[0], p.source.as_bytes()[0]))
        .collect()
}

#[test]
fn identical_layouts_zip_positionally() {
    let cb = raster(Layout::Rgb, &[1, 2, 3]);
    let cs = raster(Layout::Rgb, &[4, 5, 6]);
    let res = resolve_channels(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Rgb);
    assert_eq!(first_bytes(res.pairing.pairs()), vec![(1, 4), (2, 5), (3, 6)]);
    assert!(res.alpha.backdrop.is_none());
    assert!(res.alpha.source.is_none());
}

#[test]
fn single_plane_source_repeats_against_every_backdrop_plane() {
    let cb = raster(Layout::Rgb, &[200, 100, 50]);
    let cs = raster(Layout::L, &[128]);
    let res = resolve_channels(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Rgb);
    assert_eq!(
        first_bytes(res.pairing.pairs()),
        vec![(200, 128), (100, 128), (50, 128)]
    );
}

#[test]
fn wider_source_wins_layout_and_pads_backdrop_with_last_plane() {
    let cb = raster(Layout::La, &[7, 99]);
    let cs = raster(Layout::Cmyk, &[1, 2, 3, 4]);
    let err = resolve_channels(&cb, &cs).unwrap_err();
    assert!(matches!(err, BlendError::UnsupportedLayout(_)));

    let cb = raster(Layout::L, &[7]);
    let res = resolve_channels(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Cmyk);
    assert_eq!(
        first_bytes(res.pairing.pairs()),
        vec![(7, 1), (7, 2), (7, 3), (7, 4)]
    );
}

#[test]
fn tie_prefers_backdrop_layout() {
    let cb = raster(Layout::Hsv, &[1, 2, 3]);
    let cs = raster(Layout::Rgb, &[4, 5, 6]);
    assert_eq!(resolve_channels(&cb, &cs).unwrap().layout, Layout::Hsv);
    assert_eq!(resolve_channels(&cs, &cb).unwrap().layout, Layout::Rgb);
}

#[test]
fn destination_keeps_alpha_only_from_backdrop() {
    assert_eq!(
        destination_layout(Layout::La, Layout::Rgb).unwrap(),
        Layout::Rgba
    );
    assert_eq!(
        destination_layout(Layout::Rgb, Layout::Rgba).unwrap(),
        Layout::Rgb
    );
    assert_eq!(
        destination_layout(Layout::Rgba, Layout::L).unwrap(),
        Layout::Rgba
    );
    assert_eq!(
        destination_layout(Layout::L, Layout::La).unwrap(),
        Layout::L
    );
}

#[test]
fn alpha_planes_are_split_off_both_sides() {
    let cb = raster(Layout::Rgba, &[1, 2, 3, 40]);
    let cs = raster(Layout::La, &[9, 90]);
    let res = resolve_channels(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Rgba);
    assert_eq!(res.pairing.len(), 3);
    assert_eq!(first_bytes(res.pairing.pairs()), vec![(1, 9), (2, 9), (3, 9)]);
    assert_eq!(res.alpha.backdrop.unwrap().as_bytes()[0], 40);
    assert_eq!(res.alpha.source.unwrap().as_bytes()[0], 90);
}

#[test]
fn grayscale_pair_is_evaluated_whole() {
    let cb = raster(Layout::L, &[10]);
    let cs = raster(Layout::L, &[20]);
    let res = resolve_channels(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::L);
    assert!(matches!(res.pairing, PlanePairing::Whole(_)));
    assert_eq!(res.pairing.len(), 1);
}

#[test]
fn cmyk_against_grayscale_repeats_gray_for_every_ink() {
    let cb = raster(Layout::Cmyk, &[10, 20, 30, 40]);
    let cs = raster(Layout::L, &[5]);
    let res = resolve_channels(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Cmyk);
    assert_eq!(
        first_bytes(res.pairing.pairs()),
        vec![(10, 5), (20, 5), (30, 5), (40, 5)]
    );
}

#[test]
fn size_mismatch_is_rejected() {
    let cb = Raster::filled(Layout::Rgb, 2, 2, &[0, 0, 0]).unwrap();
    let cs = Raster::filled(Layout::Rgb, 3, 2, &[0, 0, 0]).unwrap();
    let err = resolve_channels(&cb, &cs).unwrap_err();
    assert!(matches!(
        err,
        BlendError::SizeMismatch {
            backdrop_size: (2, 2),
            source_size: (3, 2)
        }
    ));
}

#[test]
fn color_triples_follow_the_backdrop_layout() {
    let cb = raster(Layout::Rgba, &[1, 2, 3, 200]);
    let cs = raster(Layout::Cmyk, &[4, 5, 6, 7]);
    let res = resolve_color_triples(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Rgba);
    assert_eq!(first_bytes(res.pairing.pairs()), vec![(1, 4), (2, 5), (3, 6)]);
    assert_eq!(res.alpha.backdrop.unwrap().as_bytes()[0], 200);
    assert!(res.alpha.source.is_none());
}

#[test]
fn color_triples_carry_backdrop_planes_past_the_third() {
    let cb = raster(Layout::Cmyk, &[1, 2, 3, 4]);
    let cs = raster(Layout::Rgba, &[5, 6, 7, 8]);
    let res = resolve_color_triples(&cb, &cs).unwrap();
    assert_eq!(res.layout, Layout::Cmyk);
    let backdrop = res
        .pairing
        .pairs()
        .iter()
        .map(|p| p.backdrop.as_bytes()[0])
        .collect::<Vec<_>>();
    assert_eq!(backdrop, vec![1, 2, 3, 4]);
    assert_eq!(res.alpha.source.unwrap().as_bytes()[0], 8);
}

#[test]
fn color_triples_reject_grayscale_and_size_mismatch() {
    let gray = raster(Layout::La, &[1, 2]);
    let rgb = raster(Layout::Rgb, &[1, 2, 3]);
    assert!(matches!(
        resolve_color_triples(&rgb, &gray),
        Err(BlendError::UnsupportedLayout(_))
    ));
    assert!(matches!(
        resolve_color_triples(&gray, &rgb),
        Err(BlendError::UnsupportedLayout(_))
    ));

    let wide = Raster::filled(Layout::Rgb, 3, 2, &[0, 0, 0]).unwrap();
    assert!(matches!(
        resolve_color_triples(&rgb, &wide),
        Err(BlendError::SizeMismatch { .. })
    ));
}

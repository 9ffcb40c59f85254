use crate::foundation::math::{nonzero, to_u8};
use crate::raster::buffer::paste_plane;
use crate::raster::plane::Plane;
use crate::resolve::channels::AlphaPair;

/// "Over" alpha of a source with alpha `sa` on a backdrop with alpha `ba`, all 0..=255.
pub fn over_alpha(backdrop_alpha: u8, source_alpha: u8) -> f32 {
    let ba = f32::from(backdrop_alpha);
    let sa = f32::from(source_alpha);
    sa + ba * (255.0 - sa) / 255.0
}

/// Share (0..=255) of the blended color in the over-composited result.
///
/// Equals the source alpha on an opaque backdrop; `0` when both sides are transparent.
pub fn over_mask(backdrop_alpha: u8, source_alpha: u8) -> u8 {
    let a_eff = over_alpha(backdrop_alpha, source_alpha);
    to_u8(255.0 * f32::from(source_alpha) / nonzero(a_eff))
}

/// Merge blended color planes back onto the (paired) backdrop planes.
///
/// - both alphas: paste with the over mask of the two;
/// - source alpha only: paste with the source alpha;
/// - otherwise: blended planes are returned as they are.
///
/// Alpha values themselves are never written here; the caller reattaches backdrop alpha.
pub(crate) fn composite_planes(
    blended: Vec<Plane>,
    backdrop: &[&Plane],
    alpha: AlphaPair<'_>,
) -> Vec<Plane> {
    let mask = match (alpha.backdrop, alpha.source) {
        (Some(ba), Some(sa)) => {
            let data = ba
                .as_bytes()
                .iter()
                .zip(sa.as_bytes())
                .map(|(&b, &s)| over_mask(b, s))
                .collect::<Vec<_>>();
            Plane::from_parts(sa.width(), sa.height(), data)
        }
        (None, Some(sa)) => sa.clone(),
        (_, None) => return blended,
    };

    blended
        .iter()
        .zip(backdrop)
        .map(|(top, base)| paste_plane(base, top, &mask))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/composite/alpha.rs"]
mod tests;

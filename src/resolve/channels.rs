use crate::foundation::error::{BlendError, BlendResult};
use crate::raster::buffer::Raster;
use crate::raster::layout::Layout;
use crate::raster::plane::Plane;

/// One destination channel: the backdrop and source planes feeding it.
#[derive(Clone, Copy, Debug)]
pub struct PlanePair<'a> {
    /// Plane taken from the backdrop.
    pub backdrop: &'a Plane,
    /// Plane taken from the source.
    pub source: &'a Plane,
}

/// How color planes of the two rasters line up.
#[derive(Clone, Debug)]
pub enum PlanePairing<'a> {
    /// Both rasters are single-plane grayscale without alpha; the formula runs on the two
    /// whole images and no merge step follows.
    Whole(PlanePair<'a>),
    /// One pair per destination color channel, in destination order.
    Split(Vec<PlanePair<'a>>),
}

impl<'a> PlanePairing<'a> {
    /// Pairs in destination order (a single pair for [`PlanePairing::Whole`]).
    pub fn pairs(&self) -> &[PlanePair<'a>] {
        match self {
            Self::Whole(pair) => std::slice::from_ref(pair),
            Self::Split(pairs) => pairs,
        }
    }

    /// Number of destination color channels.
    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    /// Always `false`: every layout has at least one color plane.
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// Alpha planes of both sides; either may be absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaPair<'a> {
    /// Backdrop alpha.
    pub backdrop: Option<&'a Plane>,
    /// Source alpha.
    pub source: Option<&'a Plane>,
}

/// Output of [`resolve_channels`].
#[derive(Clone, Debug)]
pub struct ChannelResolution<'a> {
    /// Layout of the composited result, alpha included when the backdrop has alpha.
    pub layout: Layout,
    /// Color plane pairs, one per destination color channel.
    pub pairing: PlanePairing<'a>,
    /// Alpha planes, used only as compositing masks.
    pub alpha: AlphaPair<'a>,
}

/// Decide the destination layout and pair up color and alpha planes.
///
/// Rules:
/// - identical layouts keep that layout and zip planes positionally;
/// - otherwise the side with more color planes wins the layout (the backdrop on a tie), and
///   the shorter side is padded by repeating its own last plane;
/// - the destination carries alpha iff the backdrop does.
pub fn resolve_channels<'a>(
    backdrop: &'a Raster,
    source: &'a Raster,
) -> BlendResult<ChannelResolution<'a>> {
    if backdrop.dimensions() != source.dimensions() {
        return Err(BlendError::size_mismatch(
            backdrop.dimensions(),
            source.dimensions(),
        ));
    }

    let (cb_color, cb_alpha) = backdrop.split_alpha();
    let (cs_color, cs_alpha) = source.split_alpha();
    let alpha = AlphaPair {
        backdrop: cb_alpha,
        source: cs_alpha,
    };

    if backdrop.layout() == Layout::L && source.layout() == Layout::L {
        return Ok(ChannelResolution {
            layout: Layout::L,
            pairing: PlanePairing::Whole(PlanePair {
                backdrop: &cb_color[0],
                source: &cs_color[0],
            }),
            alpha,
        });
    }

    let layout = destination_layout(backdrop.layout(), source.layout())?;
    let count = cb_color.len().max(cs_color.len());
    let pairs = (0..count)
        .map(|i| PlanePair {
            backdrop: padded(cb_color, i),
            source: padded(cs_color, i),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        backdrop = %backdrop.layout(),
        source = %source.layout(),
        destination = %layout,
        pairs = pairs.len(),
        backdrop_alpha = alpha.backdrop.is_some(),
        source_alpha = alpha.source.is_some(),
        "resolved channel layout"
    );

    Ok(ChannelResolution {
        layout,
        pairing: PlanePairing::Split(pairs),
        alpha,
    })
}

/// Pair planes for the whole-pixel modes (hue, saturation, color, luminosity).
///
/// The backdrop alone decides the destination layout. Both sides must carry at least three
/// color planes; the first three of each form the blended triple. Backdrop color planes past the
/// third pass through, and the source's extra planes are never read.
pub fn resolve_color_triples<'a>(
    backdrop: &'a Raster,
    source: &'a Raster,
) -> BlendResult<ChannelResolution<'a>> {
    for (side, raster) in [("backdrop", backdrop), ("source", source)] {
        let layout = raster.layout();
        if layout.color_channels() < 3 {
            return Err(BlendError::unsupported_layout(format!(
                "whole-pixel blending needs at least 3 color channels, {side} is {layout}"
            )));
        }
    }
    if backdrop.dimensions() != source.dimensions() {
        return Err(BlendError::size_mismatch(
            backdrop.dimensions(),
            source.dimensions(),
        ));
    }

    let (cb_color, cb_alpha) = backdrop.split_alpha();
    let (cs_color, cs_alpha) = source.split_alpha();
    let pairs = cb_color
        .iter()
        .enumerate()
        .map(|(i, plane)| PlanePair {
            backdrop: plane,
            source: &cs_color[i.min(2)],
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        backdrop = %backdrop.layout(),
        source = %source.layout(),
        pairs = pairs.len(),
        backdrop_alpha = cb_alpha.is_some(),
        source_alpha = cs_alpha.is_some(),
        "resolved color triples"
    );

    Ok(ChannelResolution {
        layout: backdrop.layout(),
        pairing: PlanePairing::Split(pairs),
        alpha: AlphaPair {
            backdrop: cb_alpha,
            source: cs_alpha,
        },
    })
}

/// Destination layout for two (possibly different) input layouts.
pub fn destination_layout(backdrop: Layout, source: Layout) -> BlendResult<Layout> {
    if backdrop == source {
        return Ok(backdrop);
    }
    let color = if source.color_channels() > backdrop.color_channels() {
        source.color_layout()
    } else {
        backdrop.color_layout()
    };
    if !backdrop.has_alpha() {
        return Ok(color);
    }
    color.with_alpha().ok_or_else(|| {
        BlendError::unsupported_layout(format!(
            "backdrop {backdrop} has alpha but destination {color} cannot carry it"
        ))
    })
}

fn padded(planes: &[Plane], idx: usize) -> &Plane {
    &planes[idx.min(planes.len() - 1)]
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/channels.rs"]
mod tests;

use rayon::prelude::*;

use crate::blend::mode::{BlendKernel, BlendMode, NonSeparableFn, SeparableFn};
use crate::blend::non_separable::ColorTriple;
use crate::composite::alpha::composite_planes;
use crate::engine::settings::{BlendSettings, BlendThreading};
use crate::foundation::error::{BlendError, BlendResult};
use crate::raster::buffer::Raster;
use crate::raster::layout::Layout;
use crate::raster::plane::{FloatPlane, Plane};
use crate::resolve::channels::{
    PlanePair, PlanePairing, resolve_channels, resolve_color_triples,
};

/// Blend `source` onto `backdrop` with default settings.
///
/// See [`blend_with`].
pub fn blend(backdrop: &Raster, source: &Raster, mode: BlendMode) -> BlendResult<Raster> {
    blend_with(backdrop, source, mode, &BlendSettings::default())
}

/// Parse `mode` and blend; unknown names fail before any pixel work.
pub fn blend_named(backdrop: &Raster, source: &Raster, mode: &str) -> BlendResult<Raster> {
    let mode = mode.parse::<BlendMode>()?;
    blend(backdrop, source, mode)
}

/// Blend `source` onto `backdrop`.
///
/// Pipeline:
/// 1. resolve the destination layout and pair color planes ([`resolve_channels`](crate::resolve_channels),
///    or [`resolve_color_triples`](crate::resolve_color_triples) for whole-pixel modes)
/// 2. run the mode's kernel per plane pair (separable) or per pixel triple (non-separable)
/// 3. paste the blended color onto the backdrop using the alpha planes as masks
/// 4. reattach the backdrop's own alpha, untouched
///
/// Inputs are never modified; a new raster is returned.
#[tracing::instrument(
    skip(backdrop, source, settings),
    fields(
        backdrop_layout = %backdrop.layout(),
        source_layout = %source.layout(),
        width = backdrop.width(),
        height = backdrop.height(),
    )
)]
pub fn blend_with(
    backdrop: &Raster,
    source: &Raster,
    mode: BlendMode,
    settings: &BlendSettings,
) -> BlendResult<Raster> {
    settings.validate()?;
    let kernel = mode.kernel();
    let res = match kernel {
        BlendKernel::Separable(_) => resolve_channels(backdrop, source)?,
        BlendKernel::NonSeparable(_) => resolve_color_triples(backdrop, source)?,
    };
    let bands = Bands::new(&settings.threading, backdrop.width())?;

    let blended = match kernel {
        BlendKernel::Separable(f) => {
            if let PlanePairing::Whole(pair) = &res.pairing {
                let plane = blend_plane(f, *pair, &bands);
                return Raster::from_planes(Layout::L, vec![plane]);
            }
            res.pairing
                .pairs()
                .iter()
                .map(|pair| blend_plane(f, *pair, &bands))
                .collect::<Vec<_>>()
        }
        BlendKernel::NonSeparable(f) => {
            let pairs = res.pairing.pairs();
            let mut planes = Vec::from(blend_triples(f, &pairs[..3], &bands));
            planes.extend(pairs[3..].iter().map(|pair| pair.backdrop.clone()));
            planes
        }
    };

    let base = res
        .pairing
        .pairs()
        .iter()
        .map(|pair| pair.backdrop)
        .collect::<Vec<_>>();
    let mut planes = composite_planes(blended, &base, res.alpha);
    if let Some(alpha) = res.alpha.backdrop {
        planes.push(alpha.clone());
    }
    Raster::from_planes(res.layout, planes)
}

fn blend_plane(f: SeparableFn, pair: PlanePair<'_>, bands: &Bands) -> Plane {
    let (w, h) = pair.backdrop.dimensions();
    let a = pair.backdrop.as_bytes();
    let b = pair.source.as_bytes();
    let mut out = FloatPlane::zeros(w, h);
    bands.run(&mut out.data, |offset, band| {
        let end = offset + band.len();
        for ((o, &x), &y) in band.iter_mut().zip(&a[offset..end]).zip(&b[offset..end]) {
            *o = f(f32::from(x), f32::from(y));
        }
    });
    out.to_plane()
}

fn blend_triples(f: NonSeparableFn, pairs: &[PlanePair<'_>], bands: &Bands) -> [Plane; 3] {
    let (w, h) = pairs[0].backdrop.dimensions();
    let cb = [0, 1, 2].map(|c| pairs[c].backdrop.as_bytes());
    let cs = [0, 1, 2].map(|c| pairs[c].source.as_bytes());

    let mut px = vec![ColorTriple::default(); (w as usize) * (h as usize)];
    bands.run(&mut px, |offset, band| {
        for (i, out) in band.iter_mut().enumerate() {
            let j = offset + i;
            let b = ColorTriple::from_u8(cb[0][j], cb[1][j], cb[2][j]);
            let s = ColorTriple::from_u8(cs[0][j], cs[1][j], cs[2][j]);
            *out = f(b, s);
        }
    });

    let mut planes = [
        FloatPlane::zeros(w, h),
        FloatPlane::zeros(w, h),
        FloatPlane::zeros(w, h),
    ];
    for (i, c) in px.iter().enumerate() {
        planes[0].data[i] = c.r * 255.0;
        planes[1].data[i] = c.g * 255.0;
        planes[2].data[i] = c.b * 255.0;
    }
    planes.map(|p| p.to_plane())
}

enum Schedule {
    Serial,
    Global,
    Pool(rayon::ThreadPool),
}

/// Row-band scheduler for per-pixel kernels.
struct Bands {
    schedule: Schedule,
    band_len: usize,
}

impl Bands {
    fn new(threading: &BlendThreading, width: u32) -> BlendResult<Self> {
        let band_len = threading
            .rows_per_task
            .max(1)
            .saturating_mul((width as usize).max(1));
        let schedule = match (threading.parallel, threading.threads) {
            (false, _) => Schedule::Serial,
            (true, None) => Schedule::Global,
            (true, Some(n)) => Schedule::Pool(build_thread_pool(n)?),
        };
        tracing::trace!(band_len, parallel = threading.parallel, "blend banding");
        Ok(Self { schedule, band_len })
    }

    /// Call `f(offset, band)` for consecutive bands of `out`; bands may run concurrently.
    fn run<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        let band_len = self.band_len;
        match &self.schedule {
            Schedule::Serial => out
                .chunks_mut(band_len)
                .enumerate()
                .for_each(|(i, band)| f(i * band_len, band)),
            Schedule::Global => out
                .par_chunks_mut(band_len)
                .enumerate()
                .for_each(|(i, band)| f(i * band_len, band)),
            Schedule::Pool(pool) => pool.install(|| {
                out.par_chunks_mut(band_len)
                    .enumerate()
                    .for_each(|(i, band)| f(i * band_len, band))
            }),
        }
    }
}

fn build_thread_pool(threads: usize) -> BlendResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(BlendError::validation(
            "blend threading 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| BlendError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pipeline.rs"]
mod tests;

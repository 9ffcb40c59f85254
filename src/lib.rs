//! layerblend composites two 8-bit rasters with layer blend modes ("multiply", "screen", "hue",
//! "luminosity", ...), the way layered image editors do.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: backdrop + source layouts -> destination layout, color plane pairs, alpha pair
//! 2. **Blend**: run the mode's formula per plane pair (separable modes) or per pixel triple
//!    (hue, saturation, color, luminosity)
//! 3. **Composite**: paste the blended color onto the backdrop using the alpha planes as masks,
//!    then reattach the backdrop's own alpha
//!
//! Inputs may differ in layout (L, LA, RGB, RGBA, HSV, CMYK, ...). The side with more color
//! planes decides the destination layout and the shorter side repeats its last plane.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: inputs are read-only and every call returns a new [`Raster`].
//! - **Branch-free kernels**: two-branch formulas are written as 0/1 mask arithmetic.
//!
//! ```
//! use layerblend::{Layout, Raster, multiply};
//!
//! let backdrop = Raster::filled(Layout::Rgb, 1, 1, &[200, 100, 50]).unwrap();
//! let source = Raster::filled(Layout::Rgb, 1, 1, &[128, 128, 128]).unwrap();
//! let out = multiply(&backdrop, &source).unwrap();
//! assert_eq!(out.pixel(0, 0), Some(vec![100, 50, 25]));
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blend;
mod composite;
mod engine;
mod foundation;
mod raster;
mod resolve;

pub use blend::mode::{BlendKernel, BlendMode, NonSeparableFn, SeparableFn};
pub use blend::non_separable::{ColorTriple, clip_color, lum, sat, set_lum, set_sat};
pub use composite::alpha::{over_alpha, over_mask};
pub use engine::modes::{
    color, color_burn, color_dodge, darken, difference, exclusion, hard_light, hue, lighten,
    linear_dodge, linear_light, luminosity, multiply, normal, overlay, pin_light, saturation,
    screen, soft_light, subtract, vivid_light,
};
pub use engine::pipeline::{blend, blend_named, blend_with};
pub use engine::settings::{BlendSettings, BlendThreading};
pub use foundation::error::{BlendError, BlendResult};
pub use raster::buffer::Raster;
pub use raster::interop::{decode_raster, open_raster};
pub use raster::layout::Layout;
pub use raster::plane::Plane;
pub use resolve::channels::{
    AlphaPair, ChannelResolution, PlanePair, PlanePairing, destination_layout, resolve_channels,
    resolve_color_triples,
};

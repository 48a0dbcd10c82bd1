//! facegif turns text seeds into faces and faces into looping animated GIFs.
//!
//! # Pipeline overview
//!
//! 1. **Map**: `seed -> FaceDescriptor` via SHA-256 (see [`map`] for the exact scheme)
//! 2. **Compose**: `FaceDescriptor -> SVG` by layering catalog fragments in z-order
//! 3. **Rasterize**: `SVG -> FrameRGBA` (resvg, transparent background)
//! 4. **Encode**: frames -> animated GIF, one delay for every frame, looping forever
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same seed list and duration always produce the same bytes.
//! - **Immutable catalog**: a [`ComponentCatalog`] is validated once and only read afterwards.
//! - **Fail fast**: invalid seed lists and durations are rejected before any rendering.
#![forbid(unsafe_code)]

mod catalog;
mod face;
mod foundation;
mod render;

/// Encoding sinks.
pub mod encode;
/// Parsing helpers for raw request values.
pub mod request;

pub use catalog::builtin::BUILTIN_COMBINATIONS;
pub use catalog::model::{CatalogDef, Category, CategoryKind, ComponentCatalog, ComponentOption};
pub use encode::gif::{GIF_CONTENT_TYPE, GifSink};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use face::mapper::{FaceDescriptor, MAX_CATEGORIES, Selection, map, map_all};
pub use foundation::core::{
    Canvas, DEFAULT_FRAME_DURATION_MS, FrameDuration, FrameIndex, MAX_CANVAS_DIM,
    MAX_FRAME_DURATION_MS, MAX_SEEDS,
};
pub use foundation::error::{FaceError, FaceResult};
pub use render::compose::compose_svg;
pub use render::pipeline::{
    animate, render, render_frame, render_frames, render_into, render_request,
};
pub use render::raster::{FrameRGBA, parse_svg, rasterize_svg, unpremultiply_rgba8_in_place};
pub use request::{AnimationRequest, parse_duration, parse_seed_list};
